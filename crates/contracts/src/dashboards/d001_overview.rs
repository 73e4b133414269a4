//! Home dashboard: KPI cards, recent bookings, quick actions, contact card.

use crate::domain::a001_booking::Booking;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Increase => "stat-card__change stat-card__change--up",
            Trend::Decrease => "stat-card__change stat-card__change--down",
        }
    }
}

/// One headline metric card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Signed percentage, e.g. `+12%`
    pub change: &'static str,
    pub trend: Trend,
    pub icon: &'static str,
}

impl KpiCard {
    pub fn change_caption(&self) -> String {
        format!("{} from last month", self.change)
    }
}

pub fn kpi_cards() -> Vec<KpiCard> {
    vec![
        KpiCard {
            title: "Total Bookings",
            value: "156",
            change: "+12%",
            trend: Trend::Increase,
            icon: "calendar",
        },
        KpiCard {
            title: "Active Bookings",
            value: "23",
            change: "+5%",
            trend: Trend::Increase,
            icon: "trending-up",
        },
        KpiCard {
            title: "Revenue (This Month)",
            value: "₹1,24,500",
            change: "+18%",
            trend: Trend::Increase,
            icon: "dollar",
        },
        KpiCard {
            title: "New Customers",
            value: "42",
            change: "+8%",
            trend: Trend::Increase,
            icon: "users",
        },
    ]
}

pub const RECENT_BOOKINGS_LIMIT: usize = 4;

/// First rows of the booking list, in list order
pub fn recent_bookings(bookings: &[Booking]) -> Vec<Booking> {
    bookings.iter().take(RECENT_BOOKINGS_LIMIT).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Add New Booking",
        href: "/bookings",
        icon: "calendar",
    },
    QuickAction {
        label: "View Analytics",
        href: "/analytics",
        icon: "trending-up",
    },
    QuickAction {
        label: "Manage Team",
        href: "/users",
        icon: "users",
    },
];

/// "Company Overview" card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyContact {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub cities: &'static str,
}

pub const COMPANY_CONTACT: CompanyContact = CompanyContact {
    name: "Swift Movers Ltd",
    initials: "SM",
    tagline: "Established since 2018",
    email: "admin@swiftmovers.com",
    phone: "+91 98765 43210",
    cities: "Delhi, Mumbai, Bangalore",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::sample_bookings;

    #[test]
    fn test_kpi_cards() {
        let cards = kpi_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[2].value, "₹1,24,500");
        assert_eq!(cards[0].change_caption(), "+12% from last month");
    }

    #[test]
    fn test_recent_bookings_takes_first_four() {
        let recent = recent_bookings(&sample_bookings());
        let ids: Vec<&str> = recent.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["BK001", "BK002", "BK003", "BK004"]);
        assert!(recent_bookings(&[]).is_empty());
    }

    #[test]
    fn test_quick_action_targets() {
        let hrefs: Vec<&str> = QUICK_ACTIONS.iter().map(|a| a.href).collect();
        assert_eq!(hrefs, vec!["/bookings", "/analytics", "/users"]);
    }
}
