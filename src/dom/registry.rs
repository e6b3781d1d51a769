//! Typed registry of the elements the dashboard writes into.

use super::Document;
use crate::error::{DashboardError, Result};
use crate::view::PageId;

/// Fixed elements addressed by the view controller and translator.
///
/// Per-page menu items and panels are derived from [`PageId`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    // Header and chrome
    PageTitle,
    PageSubtitle,
    LanguageSelect,
    ModalOverlay,
    ModalTitle,
    ModalBody,

    // Dashboard
    TotalRevenue,
    TotalTransactions,
    SuccessRate,
    ActiveMerchants,
    RecentTransactionsBody,
    ChartPeriod,

    // Transactions / merchants
    TransactionsBody,
    MerchantsGrid,

    // Billing
    TotalPlatformRevenue,
    MonthlyRevenue,
    AverageFeePerTransaction,
    RecentInvoicesBody,
    BillingConfigModal,
    ConfigEuPercentage,
    ConfigEuFixed,
    ConfigNonEuPercentage,
    ConfigNonEuFixed,
    ConfigChargebackFee,
    ConfigRefundFee,
    ConfigBillingCycle,
    ConfigAutoBilling,

    // Fee calculator
    CalcAmount,
    CalcCardType,
    CalcMerchant,
    ResultAmount,
    ResultFee,
    ResultNet,
    CalculationResult,

    // Revenue analytics
    RevenueStartDate,
    RevenueEndDate,
    TransactionFeesTotal,
    EuropeanFees,
    NonEuropeanFees,
    OtherFeesTotal,
    ChargebackFees,
    RefundFees,
    ActiveMerchantsCount,
    AvgRevenuePerMerchant,
}

impl ElementId {
    pub const ALL: [ElementId; 44] = [
        ElementId::PageTitle,
        ElementId::PageSubtitle,
        ElementId::LanguageSelect,
        ElementId::ModalOverlay,
        ElementId::ModalTitle,
        ElementId::ModalBody,
        ElementId::TotalRevenue,
        ElementId::TotalTransactions,
        ElementId::SuccessRate,
        ElementId::ActiveMerchants,
        ElementId::RecentTransactionsBody,
        ElementId::ChartPeriod,
        ElementId::TransactionsBody,
        ElementId::MerchantsGrid,
        ElementId::TotalPlatformRevenue,
        ElementId::MonthlyRevenue,
        ElementId::AverageFeePerTransaction,
        ElementId::RecentInvoicesBody,
        ElementId::BillingConfigModal,
        ElementId::ConfigEuPercentage,
        ElementId::ConfigEuFixed,
        ElementId::ConfigNonEuPercentage,
        ElementId::ConfigNonEuFixed,
        ElementId::ConfigChargebackFee,
        ElementId::ConfigRefundFee,
        ElementId::ConfigBillingCycle,
        ElementId::ConfigAutoBilling,
        ElementId::CalcAmount,
        ElementId::CalcCardType,
        ElementId::CalcMerchant,
        ElementId::ResultAmount,
        ElementId::ResultFee,
        ElementId::ResultNet,
        ElementId::CalculationResult,
        ElementId::RevenueStartDate,
        ElementId::RevenueEndDate,
        ElementId::TransactionFeesTotal,
        ElementId::EuropeanFees,
        ElementId::NonEuropeanFees,
        ElementId::OtherFeesTotal,
        ElementId::ChargebackFees,
        ElementId::RefundFees,
        ElementId::ActiveMerchantsCount,
        ElementId::AvgRevenuePerMerchant,
    ];

    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::PageTitle => "page-title",
            ElementId::PageSubtitle => "page-subtitle",
            ElementId::LanguageSelect => "languageSelect",
            ElementId::ModalOverlay => "modal-overlay",
            ElementId::ModalTitle => "modal-title",
            ElementId::ModalBody => "modal-body",
            ElementId::TotalRevenue => "total-revenue",
            ElementId::TotalTransactions => "total-transactions",
            ElementId::SuccessRate => "success-rate",
            ElementId::ActiveMerchants => "active-merchants",
            ElementId::RecentTransactionsBody => "recent-transactions-body",
            ElementId::ChartPeriod => "chart-period",
            ElementId::TransactionsBody => "transactions-body",
            ElementId::MerchantsGrid => "merchants-grid",
            ElementId::TotalPlatformRevenue => "total-platform-revenue",
            ElementId::MonthlyRevenue => "monthly-revenue",
            ElementId::AverageFeePerTransaction => "average-fee-per-transaction",
            ElementId::RecentInvoicesBody => "recent-invoices-body",
            ElementId::BillingConfigModal => "billing-config-modal",
            ElementId::ConfigEuPercentage => "config-eu-percentage",
            ElementId::ConfigEuFixed => "config-eu-fixed",
            ElementId::ConfigNonEuPercentage => "config-non-eu-percentage",
            ElementId::ConfigNonEuFixed => "config-non-eu-fixed",
            ElementId::ConfigChargebackFee => "config-chargeback-fee",
            ElementId::ConfigRefundFee => "config-refund-fee",
            ElementId::ConfigBillingCycle => "config-billing-cycle",
            ElementId::ConfigAutoBilling => "config-auto-billing",
            ElementId::CalcAmount => "calc-amount",
            ElementId::CalcCardType => "calc-card-type",
            ElementId::CalcMerchant => "calc-merchant",
            ElementId::ResultAmount => "result-amount",
            ElementId::ResultFee => "result-fee",
            ElementId::ResultNet => "result-net",
            ElementId::CalculationResult => "calculation-result",
            ElementId::RevenueStartDate => "revenue-start-date",
            ElementId::RevenueEndDate => "revenue-end-date",
            ElementId::TransactionFeesTotal => "transaction-fees-total",
            ElementId::EuropeanFees => "european-fees",
            ElementId::NonEuropeanFees => "non-european-fees",
            ElementId::OtherFeesTotal => "other-fees-total",
            ElementId::ChargebackFees => "chargeback-fees",
            ElementId::RefundFees => "refund-fees",
            ElementId::ActiveMerchantsCount => "active-merchants-count",
            ElementId::AvgRevenuePerMerchant => "avg-revenue-per-merchant",
        }
    }
}

/// Proof that a document carries every required element.
///
/// Built once when the application context is assembled; after that the
/// controller writes without per-call presence checks.
#[derive(Debug, Clone, Copy)]
pub struct ElementRegistry {
    _validated: (),
}

impl ElementRegistry {
    /// Every id the dashboard expects, fixed elements first.
    pub fn required_ids() -> Vec<String> {
        let mut ids: Vec<String> = ElementId::ALL
            .iter()
            .map(|id| id.dom_id().to_string())
            .collect();
        for page in PageId::ALL {
            ids.push(page.menu_id());
            ids.push(page.panel_id());
        }
        ids
    }

    /// Check `document` once, reporting every missing id together.
    pub fn validate(document: &dyn Document) -> Result<Self> {
        let missing: Vec<String> = Self::required_ids()
            .into_iter()
            .filter(|id| !document.contains(id))
            .collect();

        if missing.is_empty() {
            Ok(Self { _validated: () })
        } else {
            Err(DashboardError::MissingElements(missing))
        }
    }
}
