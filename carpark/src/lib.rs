//! Parking Lot Engine
//!
//! An in-memory model of a parking lot with a fixed number of numbered slots.
//! Vehicles are parked into the lowest free slot and released by slot number.
//!
//! # Overview
//!
//! This library provides:
//! - [`Vehicle`]: an immutable record of registration number, color and type
//! - [`ParkingLot`]: slot allocation and the occupancy queries
//! - [`LotError`]: the failure signals of `park` and `leave`
//!
//! # Quick Example
//!
//! ```
//! use carpark::{LotError, ParkingLot, Vehicle};
//!
//! let mut lot = ParkingLot::new(2);
//! assert_eq!(lot.park(Vehicle::new("KA-01", "White", "Car")), Ok(1));
//! assert_eq!(lot.park(Vehicle::new("KA-02", "Black", "Car")), Ok(2));
//! assert_eq!(lot.park(Vehicle::new("KA-03", "Red", "Car")), Err(LotError::Full));
//!
//! // Freed slots are handed out again, lowest first
//! lot.leave(1).unwrap();
//! assert_eq!(lot.park(Vehicle::new("KA-03", "Red", "Car")), Ok(1));
//!
//! assert_eq!(lot.count_by_type("car"), 2);
//! assert_eq!(lot.slot_by_registration("ka-02"), Some(2));
//! ```
//!
//! # Key Concepts
//!
//! ## Allocation
//!
//! Slots are numbered `1..=capacity`. [`ParkingLot::park`] always picks the
//! lowest-numbered free slot (first-fit ascending). "Full" is derived from the
//! occupancy count and never stored.
//!
//! ## Matching
//!
//! Every query compares strings case-insensitively, so a vehicle parked with
//! type `Car` is counted by a query for `car`.

mod error;
mod lot;
mod vehicle;

// Re-export public API
pub use error::LotError;
pub use lot::{ParkingLot, SlotNumber};
pub use vehicle::Vehicle;
