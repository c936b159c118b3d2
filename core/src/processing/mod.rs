pub mod background;

pub use background::BackgroundStage;
