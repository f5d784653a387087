use crate::index::AvailabilityIndex;
use crate::model::Slot;

/// Order shop slots so the hardest to staff come first.
///
/// Sort keys:
/// 1. Fewer available employees first
/// 2. Earlier day
/// 3. Earlier hour
///
/// Duplicate slots are kept and stay adjacent; each is assigned separately.
pub fn prioritize(shop_slots: &[Slot], index: &AvailabilityIndex) -> Vec<Slot> {
    let mut ordered: Vec<Slot> = shop_slots.to_vec();
    ordered.sort_by_key(|slot| (index.count(*slot), slot.day, slot.hour));
    ordered
}
