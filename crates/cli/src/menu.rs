// Menu choices parsed from the numbers typed at each prompt

/// Top-level routing. Not an access control boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Staff,
    Exit,
}

impl Role {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Role::Customer),
            2 => Some(Role::Staff),
            3 => Some(Role::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerChoice {
    QueueMe,
    CheckQueue,
    Back,
}

impl CustomerChoice {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(CustomerChoice::QueueMe),
            2 => Some(CustomerChoice::CheckQueue),
            3 => Some(CustomerChoice::Back),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffChoice {
    ServeNext,
    DeleteToken,
    ShowSummary,
    Back,
}

impl StaffChoice {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(StaffChoice::ServeNext),
            2 => Some(StaffChoice::DeleteToken),
            3 => Some(StaffChoice::ShowSummary),
            4 => Some(StaffChoice::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_choice() {
        assert_eq!(Role::from_choice(1), Some(Role::Customer));
        assert_eq!(Role::from_choice(2), Some(Role::Staff));
        assert_eq!(Role::from_choice(3), Some(Role::Exit));
        assert_eq!(Role::from_choice(0), None);
        assert_eq!(Role::from_choice(-1), None);
    }

    #[test]
    fn test_staff_choice_back_is_four() {
        assert_eq!(StaffChoice::from_choice(4), Some(StaffChoice::Back));
        assert_eq!(StaffChoice::from_choice(5), None);
        assert_eq!(CustomerChoice::from_choice(4), None);
    }
}
