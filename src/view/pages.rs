use std::fmt;

/// The fixed set of dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Dashboard,
    Transactions,
    Merchants,
    Analytics,
    Security,
    Settings,
    Billing,
    FeeCalculator,
    Revenue,
}

impl PageId {
    pub const ALL: [PageId; 9] = [
        PageId::Dashboard,
        PageId::Transactions,
        PageId::Merchants,
        PageId::Analytics,
        PageId::Security,
        PageId::Settings,
        PageId::Billing,
        PageId::FeeCalculator,
        PageId::Revenue,
    ];

    /// Page shown at startup and whose header stands in for unknown ids.
    pub const DEFAULT: PageId = PageId::Dashboard;

    pub fn parse(id: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.as_str() == id)
    }

    /// Identifier used in markup (`data-page`, panel ids).
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Transactions => "transactions",
            PageId::Merchants => "merchants",
            PageId::Analytics => "analytics",
            PageId::Security => "security",
            PageId::Settings => "settings",
            PageId::Billing => "billing",
            PageId::FeeCalculator => "fee-calculator",
            PageId::Revenue => "revenue",
        }
    }

    /// Translation key of the header title.
    pub fn title_key(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Transactions => "transactions",
            PageId::Merchants => "merchants",
            PageId::Analytics => "analytics",
            PageId::Security => "security_compliance",
            PageId::Settings => "settings",
            PageId::Billing => "billing_management",
            PageId::FeeCalculator => "fee_calculator",
            PageId::Revenue => "revenue_analytics",
        }
    }

    /// Translation key of the header subtitle.
    pub fn subtitle_key(&self) -> &'static str {
        match self {
            PageId::Dashboard => "monitor_performance",
            PageId::Transactions => "transactions_subtitle",
            PageId::Merchants => "merchants_subtitle",
            PageId::Analytics => "analytics_subtitle",
            PageId::Security => "security_subtitle",
            PageId::Settings => "settings_subtitle",
            PageId::Billing => "billing_subtitle",
            PageId::FeeCalculator => "fee_calculator_subtitle",
            PageId::Revenue => "revenue_subtitle",
        }
    }

    /// Translation key of the sidebar label.
    pub fn menu_label_key(&self) -> &'static str {
        match self {
            PageId::Security => "security",
            PageId::Billing => "billing",
            PageId::Revenue => "revenue",
            other => other.title_key(),
        }
    }

    pub fn menu_id(&self) -> String {
        format!("menu-{}", self.as_str())
    }

    pub fn panel_id(&self) -> String {
        format!("{}-page", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
