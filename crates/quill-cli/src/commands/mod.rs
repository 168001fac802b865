pub mod article;
pub mod ask;
pub mod dashboard;
pub mod describe_image;
pub mod dispatch;
pub mod goal;
pub mod guide;
pub mod reference;
pub mod shared;
pub mod style;
pub mod task;
pub mod write;
