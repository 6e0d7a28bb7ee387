/// Room categories offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
    Family,
}

impl RoomType {
    pub const ALL: [RoomType; 5] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Family,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }

    /// Exact, case-sensitive match on the stored name.
    pub fn parse(value: &str) -> Option<RoomType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(RoomType::parse("Suite"), Some(RoomType::Suite));
        assert_eq!(RoomType::parse("suite"), None);
        assert_eq!(RoomType::parse("Penthouse"), None);
    }
}
