use serde::{Deserialize, Serialize};

/// A positioned Wi-Fi hotspot assigned one channel.
///
/// Hotspots carry no identifier; identity is the index into the placement
/// vector, which stays stable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub channel: u8,
}

impl Hotspot {
    pub fn new(x: f64, y: f64, channel: u8) -> Self {
        Self { x, y, channel }
    }

    pub fn distance_to(&self, other: &Hotspot) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Hotspot::new(0.0, 0.0, 1);
        let b = Hotspot::new(3.0, 4.0, 2);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Hotspot::new(17.5, -2.0, 3);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
