/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn seconds(self) -> f64 {
        self.0
    }

    pub fn offset_s(self, delta_s: f64) -> Time {
        Time(self.0 + delta_s)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn offset_and_ordering() {
        let t = Time(1.5).offset_s(3.0);
        assert_eq!(t, Time(4.5));
        assert!(Time(1.0) < Time(2.0));
    }
}
