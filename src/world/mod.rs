mod descriptor;
mod dungeon;
mod fov;

pub use descriptor::{DescriptorError, ObjectInfo, Plane, WallInfo};
pub use dungeon::{Dungeon, Facing, MapError, Pose};
pub use fov::{FOV_LATERAL, FieldOfView};
