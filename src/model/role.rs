#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Owner = 1,
    Supervisor = 2,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Owner),
            2 => Some(Role::Supervisor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_role_ids() {
        assert_eq!(Role::from_id(1), Some(Role::Owner));
        assert_eq!(Role::from_id(2), Some(Role::Supervisor));
        assert_eq!(Role::from_id(9), None);
    }
}
