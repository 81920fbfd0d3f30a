//! Slot allocation and occupancy queries

use crate::error::LotError;
use crate::vehicle::Vehicle;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::debug;

/// 1-based slot number
pub type SlotNumber = usize;

/// A parking lot with a fixed number of slots
///
/// Free slots are tracked in two parts:
/// - `next_fresh`: every slot from here up to `capacity` has never been handed out
/// - `released`: min-heap of slots below `next_fresh` that were freed by `leave`
///
/// The lowest free slot is therefore the top of `released` if there is one,
/// otherwise `next_fresh`. Memory follows occupancy, not capacity.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    occupancy: BTreeMap<SlotNumber, Vehicle>,
    released: BinaryHeap<Reverse<SlotNumber>>,
    next_fresh: SlotNumber,
}

impl ParkingLot {
    /// Create an empty lot with slots `1..=capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            occupancy: BTreeMap::new(),
            released: BinaryHeap::new(),
            next_fresh: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.occupancy.len()
    }

    /// Number of free slots
    pub fn available(&self) -> usize {
        self.capacity - self.occupancy.len()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Park a vehicle in the lowest-numbered free slot
    ///
    /// # Returns
    /// * `Ok(slot)` - The slot the vehicle was assigned
    /// * `Err(LotError::Full)` - No slot is free; the lot is unchanged
    pub fn park(&mut self, vehicle: Vehicle) -> Result<SlotNumber, LotError> {
        if self.is_full() {
            debug!(
                capacity = self.capacity,
                registration = vehicle.registration_number(),
                "lot full"
            );
            return Err(LotError::Full);
        }

        // Not full and nothing released means slots 1..next_fresh are all taken,
        // so next_fresh <= capacity here.
        let slot = match self.released.pop() {
            Some(Reverse(slot)) => slot,
            None => {
                let slot = self.next_fresh;
                self.next_fresh += 1;
                slot
            }
        };

        debug!(slot, registration = vehicle.registration_number(), "allocated");
        self.occupancy.insert(slot, vehicle);
        Ok(slot)
    }

    /// Free a slot and hand back the vehicle that occupied it
    ///
    /// `slot` is the number as requested, so it may be negative. Anything
    /// outside `1..=capacity` is reported the same way as an unoccupied slot.
    ///
    /// # Returns
    /// * `Ok(vehicle)` - The vehicle that left
    /// * `Err(LotError::AlreadyEmpty(slot))` - Nothing was parked there; the lot is unchanged
    pub fn leave(&mut self, slot: i64) -> Result<Vehicle, LotError> {
        let (freed, vehicle) = SlotNumber::try_from(slot)
            .ok()
            .and_then(|slot| self.occupancy.remove_entry(&slot))
            .ok_or(LotError::AlreadyEmpty(slot))?;
        self.released.push(Reverse(freed));
        debug!(slot = freed, registration = vehicle.registration_number(), "released");
        Ok(vehicle)
    }

    /// Vehicle parked in `slot`, if any
    pub fn get(&self, slot: SlotNumber) -> Option<&Vehicle> {
        self.occupancy.get(&slot)
    }

    /// Occupied slots in ascending slot order
    pub fn status(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> + '_ {
        self.occupancy.iter().map(|(slot, vehicle)| (*slot, vehicle))
    }

    /// Count parked vehicles of the given type, ignoring case
    pub fn count_by_type(&self, vehicle_type: &str) -> usize {
        self.occupancy
            .values()
            .filter(|v| v.has_type(vehicle_type))
            .count()
    }

    /// Registration numbers of vehicles with the given color, in slot order
    pub fn registrations_by_color(&self, color: &str) -> Vec<&str> {
        self.occupancy
            .values()
            .filter(|v| v.has_color(color))
            .map(Vehicle::registration_number)
            .collect()
    }

    /// Slots holding vehicles with the given color, ascending
    pub fn slots_by_color(&self, color: &str) -> Vec<SlotNumber> {
        self.status()
            .filter(|(_, v)| v.has_color(color))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Slot of the vehicle with the given registration number, ignoring case
    ///
    /// Registrations are not required to be unique; the lowest matching slot wins.
    pub fn slot_by_registration(&self, registration_number: &str) -> Option<SlotNumber> {
        self.status()
            .find(|(_, v)| v.has_registration(registration_number))
            .map(|(slot, _)| slot)
    }
}
