use super::forms::FormData;

/// Everything the user can ask the dashboard to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Sidebar click. Carries the raw page id; unknown ids are handled by
    /// the controller.
    Navigate(String),
    ChangeLanguage(String),
    /// Transaction volume period selector (`7d`, `30d`, `90d`).
    UpdateChart(String),
    ShowCreateTransaction,
    ShowCreateMerchant,
    CloseModal,
    CreateTransaction(FormData),
    CreateMerchant(FormData),
    CalculateFee,
    UpdateRevenueAnalytics,
    ViewTransaction(String),
    RefundTransaction(String),
    EditMerchant(String),
    ViewMerchant(String),
    ViewInvoice(String),
    GenerateInvoices,
    ShowBillingConfig,
    CloseBillingConfig,
    SaveBillingConfig,
    ApplyFilters,
    UpdateAnalytics,
}

impl Command {
    /// Command for a rendered button's `data-action` / `data-id` pair.
    pub fn from_action(action: &str, id: Option<&str>) -> Option<Command> {
        let id = id.map(str::to_string);
        let command = match action {
            "view-transaction" => Command::ViewTransaction(id?),
            "refund-transaction" => Command::RefundTransaction(id?),
            "edit-merchant" => Command::EditMerchant(id?),
            "view-merchant" => Command::ViewMerchant(id?),
            "view-invoice" => Command::ViewInvoice(id?),
            "close-modal" => Command::CloseModal,
            "generate-invoices" => Command::GenerateInvoices,
            "apply-filters" => Command::ApplyFilters,
            "update-analytics" => Command::UpdateAnalytics,
            _ => return None,
        };
        Some(command)
    }
}
