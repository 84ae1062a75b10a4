// Front ends over the calculator core: text rendering and the interactive loop.

pub mod interactive;
pub mod report;
