pub mod recorder;
pub mod replay;
pub mod run;
pub mod settings;
pub mod terminal;
pub mod window;
