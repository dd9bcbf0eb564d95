mod ids;
mod playlist;
mod video;

pub use ids::VideoId;
pub use playlist::PlaylistKey;
pub use video::{reason_label, VideoRecord};
