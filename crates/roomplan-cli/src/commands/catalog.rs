use roomplan_config::RoomplanConfig;
use roomplan_core::Room;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `roomplan catalog`: rooms ordered by tier, then id.
pub fn handle(config: &RoomplanConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rooms: Vec<Room> = config.catalog()?.rooms().collect();
    rooms.sort_by_key(|room| room.tier);
    output(&rooms, flags.format)
}
