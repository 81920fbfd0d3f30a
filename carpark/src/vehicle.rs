//! Vehicle record and case-insensitive matching

/// A parked vehicle
///
/// Fields are fixed at construction; the lot only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    registration_number: String,
    color: String,
    vehicle_type: String,
}

impl Vehicle {
    /// Create a vehicle from its registration number, color and type
    pub fn new(
        registration_number: impl Into<String>,
        color: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            color: color.into(),
            vehicle_type: vehicle_type.into(),
        }
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Whether the vehicle type equals `vehicle_type`, ignoring case
    pub fn has_type(&self, vehicle_type: &str) -> bool {
        eq_ignore_case(&self.vehicle_type, vehicle_type)
    }

    /// Whether the color equals `color`, ignoring case
    pub fn has_color(&self, color: &str) -> bool {
        eq_ignore_case(&self.color, color)
    }

    /// Whether the registration number equals `registration_number`, ignoring case
    pub fn has_registration(&self, registration_number: &str) -> bool {
        eq_ignore_case(&self.registration_number, registration_number)
    }
}

/// Compare two strings under Unicode lowercase folding
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
