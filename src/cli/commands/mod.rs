mod export;

pub use export::execute_export;
