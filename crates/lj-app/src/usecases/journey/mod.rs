mod load_timeline;

pub use load_timeline::{LoadTimeline, TimelineError};
