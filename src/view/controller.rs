//! Page navigation, data loading and command handling.
//!
//! Every loader follows the same pattern: fetch live records, fall back to
//! the fixed demo records on failure or on an empty result, and write only
//! if the navigation that started the load is still current.

use super::chart::{generate_series, Period};
use super::commands::Command;
use super::forms::{self, FormData};
use super::pages::PageId;
use super::render;
use crate::api::RevenueQuery;
use crate::context::AppContext;
use crate::demo;
use crate::dom::{ElementId, Fragment};
use crate::error::DashboardError;
use crate::models::{BillingConfig, RevenueSummary};
use chrono::{Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Proof that a load was started by a particular navigation.
///
/// A ticket stays valid until the next navigation; results carried by an
/// older ticket are dropped instead of written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    page: Option<PageId>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> Option<PageId> {
        self.page
    }
}

const BILLING_FIELDS: [(ElementId, &str); 8] = [
    (ElementId::ConfigEuPercentage, "european_card_percentage"),
    (ElementId::ConfigEuFixed, "european_card_fixed_fee"),
    (ElementId::ConfigNonEuPercentage, "non_european_card_percentage"),
    (ElementId::ConfigNonEuFixed, "non_european_card_fixed_fee"),
    (ElementId::ConfigChargebackFee, "chargeback_fee"),
    (ElementId::ConfigRefundFee, "refund_fee"),
    (ElementId::ConfigBillingCycle, "billing_cycle"),
    (ElementId::ConfigAutoBilling, "auto_billing_enabled"),
];

pub struct ViewController {
    ctx: AppContext,
    current_page: Option<PageId>,
    generation: u64,
    rng: StdRng,
}

impl ViewController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            current_page: Some(PageId::DEFAULT),
            generation: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the generator behind demo chart values and merchant figures.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }

    pub fn into_context(self) -> AppContext {
        self.ctx
    }

    /// `None` after navigating to an unknown page id.
    pub fn current_page(&self) -> Option<PageId> {
        self.current_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    fn current_ticket(&self) -> LoadTicket {
        LoadTicket {
            generation: self.generation,
            page: self.current_page,
        }
    }

    /// Restore the saved language and show the dashboard.
    pub async fn start(&mut self) {
        let ctx = &mut self.ctx;
        ctx.translator.initialize(ctx.document.as_mut());
        self.navigate_to(PageId::DEFAULT.as_str()).await;
    }

    pub async fn dispatch(&mut self, command: Command) {
        debug!("Dispatching {:?}", command);
        match command {
            Command::Navigate(page_id) => self.navigate_to(&page_id).await,
            Command::ChangeLanguage(code) => {
                self.change_language(&code).await;
            }
            Command::UpdateChart(period) => {
                let period = Period::parse(&period);
                self.ctx
                    .document
                    .set_value(ElementId::ChartPeriod.dom_id(), period.as_str());
                self.update_transaction_chart(period);
            }
            Command::ShowCreateTransaction => {
                let title = self.ctx.translator.t("new_transaction", &[]);
                let form = render::transaction_form(&self.ctx.translator);
                self.show_modal(&title, vec![form]);
            }
            Command::ShowCreateMerchant => {
                let title = self.ctx.translator.t("add_merchant", &[]);
                let form = render::merchant_form(&self.ctx.translator);
                self.show_modal(&title, vec![form]);
            }
            Command::CloseModal => self.close_modal(),
            Command::CreateTransaction(form) => self.create_transaction(&form).await,
            Command::CreateMerchant(form) => self.create_merchant(&form).await,
            Command::CalculateFee => self.calculate_fee().await,
            Command::UpdateRevenueAnalytics => self.update_revenue_analytics().await,
            Command::ViewTransaction(id) => self.alert("viewing_transaction", &[("id", id.as_str())]),
            Command::RefundTransaction(id) => {
                if self.confirm("confirm_refund", &[("id", id.as_str())]) {
                    info!("Refund requested for {}", id);
                    self.alert("refund_initiated", &[("id", id.as_str())]);
                }
            }
            Command::EditMerchant(id) => self.alert("editing_merchant", &[("id", id.as_str())]),
            Command::ViewMerchant(id) => self.alert("viewing_merchant", &[("id", id.as_str())]),
            Command::ViewInvoice(id) => {
                let title = self.ctx.translator.t("invoice_details", &[]);
                let body = self.ctx.translator.t("viewing_invoice", &[("id", id.as_str())]);
                self.show_modal(&title, vec![render::modal_message(&body)]);
            }
            Command::GenerateInvoices => {
                if self.confirm("confirm_generate_invoices", &[]) {
                    self.alert("invoice_generation_started", &[]);
                    let ticket = self.current_ticket();
                    self.render_invoices(ticket);
                }
            }
            Command::ShowBillingConfig => self.show_billing_config(),
            Command::CloseBillingConfig => {
                self.ctx
                    .document
                    .set_visible(ElementId::BillingConfigModal.dom_id(), false);
            }
            Command::SaveBillingConfig => self.save_billing_config(),
            Command::ApplyFilters => {
                self.alert("filters_applied", &[]);
                let ticket = self.current_ticket();
                self.load_transactions(ticket).await;
            }
            Command::UpdateAnalytics => {
                self.alert("analytics_updated", &[]);
                let ticket = self.current_ticket();
                self.load_analytics(ticket);
            }
        }
    }

    // ==================== Navigation ====================

    /// Switch pages and run the page's loader.
    pub async fn navigate_to(&mut self, page_id: &str) {
        let ticket = self.begin_navigation(page_id);
        self.load(ticket).await;
    }

    /// The synchronous half of a navigation: menu and panel state, header,
    /// and a fresh ticket for the loader. Any ticket issued earlier is
    /// superseded.
    pub fn begin_navigation(&mut self, page_id: &str) -> LoadTicket {
        let page = PageId::parse(page_id);
        if page.is_none() {
            warn!("Unknown page '{}'", page_id);
        }

        let doc = self.ctx.document.as_mut();
        for candidate in PageId::ALL {
            let active = Some(candidate) == page;
            doc.set_class(&candidate.menu_id(), "active", active);
            doc.set_class(&candidate.panel_id(), "active", active);
        }

        self.current_page = page;
        self.generation += 1;
        self.render_header();
        info!("Navigated to '{}' (generation {})", page_id, self.generation);

        LoadTicket {
            generation: self.generation,
            page,
        }
    }

    /// Run the loader a ticket was issued for. Superseded tickets do
    /// nothing.
    pub async fn load(&mut self, ticket: LoadTicket) {
        if !self.is_current(ticket) {
            debug!("Skipping superseded load (generation {})", ticket.generation);
            return;
        }

        match ticket.page {
            Some(PageId::Dashboard) => self.load_dashboard(ticket).await,
            Some(PageId::Transactions) => self.load_transactions(ticket).await,
            Some(PageId::Merchants) => self.load_merchants(ticket).await,
            Some(PageId::Analytics) => self.load_analytics(ticket),
            Some(PageId::Security) => info!("Security data loaded"),
            Some(PageId::Settings) => info!("Settings loaded"),
            Some(PageId::Billing) => self.load_billing(ticket).await,
            Some(PageId::FeeCalculator) => self.load_merchant_options(ticket).await,
            Some(PageId::Revenue) => self.load_revenue_page(ticket).await,
            None => debug!("No loader for unknown page"),
        }
    }

    fn render_header(&mut self) {
        let page = self.current_page.unwrap_or(PageId::DEFAULT);
        let title = self.ctx.translator.t(page.title_key(), &[]);
        let subtitle = self.ctx.translator.t(page.subtitle_key(), &[]);
        let doc = self.ctx.document.as_mut();
        doc.set_text(ElementId::PageTitle.dom_id(), &title);
        doc.set_text(ElementId::PageSubtitle.dom_id(), &subtitle);
    }

    /// Switch language, then refresh what the bindings don't cover: the
    /// header and the current page's generated content.
    pub async fn change_language(&mut self, code: &str) -> bool {
        let ctx = &mut self.ctx;
        let changed = ctx
            .translator
            .set_active_language(code, ctx.document.as_mut())
            .await;

        let active = self.ctx.translator.active_language().to_string();
        self.ctx
            .document
            .set_value(ElementId::LanguageSelect.dom_id(), &active);

        if changed {
            self.render_header();
            let ticket = self.current_ticket();
            self.refresh(ticket).await;
        }
        changed
    }

    /// Re-run the current page's loader without resetting user input.
    async fn refresh(&mut self, ticket: LoadTicket) {
        if ticket.page != Some(PageId::Revenue) {
            self.load(ticket).await;
            return;
        }

        let doc = self.ctx.document.as_ref();
        let start = doc.value(ElementId::RevenueStartDate.dom_id());
        let end = doc.value(ElementId::RevenueEndDate.dom_id());
        match forms::date_range(start.as_deref(), end.as_deref()) {
            Ok((start, end)) => self.load_revenue_analytics(ticket, start, end).await,
            Err(_) => self.load_revenue_page(ticket).await,
        }
    }

    /// Apply `write` if `ticket` is still current.
    fn commit<F>(&mut self, ticket: LoadTicket, what: &str, write: F) -> bool
    where
        F: FnOnce(&mut AppContext, &mut StdRng),
    {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale {} (generation {}, current {})",
                what, ticket.generation, self.generation
            );
            return false;
        }
        write(&mut self.ctx, &mut self.rng);
        true
    }

    // ==================== Loaders ====================

    async fn load_dashboard(&mut self, ticket: LoadTicket) {
        let stats = demo::stats();
        self.commit(ticket, "stats", |ctx, _| {
            let texts = render::stat_texts(&stats);
            let ids = [
                ElementId::TotalRevenue,
                ElementId::TotalTransactions,
                ElementId::SuccessRate,
                ElementId::ActiveMerchants,
            ];
            for (id, text) in ids.iter().zip(texts.iter()) {
                ctx.document.set_text(id.dom_id(), text);
            }
        });

        self.load_recent_transactions(ticket).await;

        if self.is_current(ticket) {
            let selected = self
                .ctx
                .document
                .value(ElementId::ChartPeriod.dom_id())
                .unwrap_or_default();
            self.update_transaction_chart(Period::parse(&selected));
            self.update_payment_method_chart();
        }
    }

    async fn load_recent_transactions(&mut self, ticket: LoadTicket) {
        let limit = self.ctx.config.recent_transactions_limit;
        let result = self.ctx.api.payments(Some(limit)).await;
        let transactions = or_demo("recent transactions", result, || demo::transactions(Utc::now()));

        self.commit(ticket, "recent transactions", |ctx, _| {
            let rows: Vec<Fragment> = transactions
                .iter()
                .map(|txn| render::transaction_row(&ctx.translator, txn))
                .collect();
            ctx.document
                .replace_children(ElementId::RecentTransactionsBody.dom_id(), rows);
        });
    }

    async fn load_transactions(&mut self, ticket: LoadTicket) {
        let result = self.ctx.api.payments(None).await;
        let transactions = or_demo("transactions", result, || demo::transactions(Utc::now()));

        self.commit(ticket, "transactions", |ctx, _| {
            let rows: Vec<Fragment> = transactions
                .iter()
                .map(|txn| render::full_transaction_row(&ctx.translator, txn))
                .collect();
            ctx.document
                .replace_children(ElementId::TransactionsBody.dom_id(), rows);
        });
    }

    async fn load_merchants(&mut self, ticket: LoadTicket) {
        let result = self.ctx.api.merchants().await;
        let merchants = or_demo("merchants", result, demo::merchants);

        self.commit(ticket, "merchants", |ctx, rng| {
            let cards: Vec<Fragment> = merchants
                .iter()
                .map(|merchant| render::merchant_card(&ctx.translator, merchant, rng))
                .collect();
            ctx.document
                .replace_children(ElementId::MerchantsGrid.dom_id(), cards);
        });
    }

    fn load_analytics(&mut self, ticket: LoadTicket) {
        self.commit(ticket, "analytics charts", |ctx, _| {
            let revenue = &mut ctx.charts.revenue;
            revenue.set_labels(demo::MONTHS);
            revenue.set_dataset_label(0, &ctx.translator.t("revenue", &[]));
            revenue.set_data(0, demo::MONTHLY_REVENUE);
            revenue.update();

            let geography = &mut ctx.charts.geography;
            geography.set_labels(demo::GEO_LABELS);
            geography.set_data(0, demo::GEO_SHARES);
            geography.update();
        });
    }

    async fn load_billing(&mut self, ticket: LoadTicket) {
        match self.ctx.api.revenue_total(RevenueQuery::Month).await {
            Ok(revenue) => {
                self.commit(ticket, "platform revenue", |ctx, _| {
                    render_platform_revenue(ctx, &revenue)
                });
            }
            Err(e) => warn!("Failed to load platform revenue: {}", e),
        }

        self.render_invoices(ticket);

        self.commit(ticket, "revenue charts", |ctx, _| {
            let t = &ctx.translator;
            let breakdown = &mut ctx.charts.revenue_breakdown;
            breakdown.set_labels(demo::MONTHS);
            breakdown.set_dataset_label(0, &t.t("transaction_fees", &[]));
            breakdown.set_dataset_label(1, &t.t("other_fees", &[]));
            breakdown.set_data(0, demo::MONTHLY_TRANSACTION_FEES);
            breakdown.set_data(1, demo::MONTHLY_OTHER_FEES);
            breakdown.update();

            let distribution = &mut ctx.charts.fee_distribution;
            distribution.set_labels(demo::FEE_DISTRIBUTION.iter().map(|(key, _)| t.t(key, &[])));
            distribution.set_data(
                0,
                demo::FEE_DISTRIBUTION
                    .iter()
                    .map(|(_, share)| *share)
                    .collect::<Vec<_>>(),
            );
            distribution.update();
        });
    }

    fn render_invoices(&mut self, ticket: LoadTicket) {
        let invoices = demo::invoices();
        self.commit(ticket, "invoices", |ctx, _| {
            let rows: Vec<Fragment> = invoices
                .iter()
                .map(|invoice| render::invoice_row(&ctx.translator, invoice))
                .collect();
            ctx.document
                .replace_children(ElementId::RecentInvoicesBody.dom_id(), rows);
        });
    }

    async fn load_merchant_options(&mut self, ticket: LoadTicket) {
        let merchants = match self.ctx.api.merchants().await {
            Ok(merchants) => merchants,
            Err(e) => {
                warn!("Failed to load merchants for the fee calculator: {}", e);
                Vec::new()
            }
        };

        self.commit(ticket, "merchant options", |ctx, _| {
            let options: Vec<Fragment> = std::iter::once(render::default_rates_option(&ctx.translator))
                .chain(merchants.iter().map(render::merchant_option))
                .collect();
            ctx.document
                .replace_children(ElementId::CalcMerchant.dom_id(), options);
        });
    }

    async fn load_revenue_page(&mut self, ticket: LoadTicket) {
        let today = Utc::now().date_naive();
        let first = today.with_day(1).unwrap_or(today);

        self.commit(ticket, "revenue date range", |ctx, _| {
            ctx.document
                .set_value(ElementId::RevenueStartDate.dom_id(), &first.to_string());
            ctx.document
                .set_value(ElementId::RevenueEndDate.dom_id(), &today.to_string());
        });

        self.load_revenue_analytics(ticket, first, today).await;
    }

    async fn load_revenue_analytics(&mut self, ticket: LoadTicket, start: NaiveDate, end: NaiveDate) {
        match self
            .ctx
            .api
            .revenue_total(RevenueQuery::Custom { start, end })
            .await
        {
            Ok(revenue) => {
                self.commit(ticket, "revenue analytics", |ctx, _| {
                    render_revenue_analytics(ctx, &revenue)
                });
            }
            Err(e) => warn!("Failed to load revenue analytics ({} to {}): {}", start, end, e),
        }
    }

    // ==================== Charts ====================

    /// Regenerate the transaction volume series and redraw the existing
    /// chart.
    pub fn update_transaction_chart(&mut self, period: Period) {
        let series = generate_series(period, Utc::now().date_naive(), &mut self.rng);
        let chart = &mut self.ctx.charts.transaction_volume;
        chart.set_labels(series.labels);
        chart.set_data(0, series.values);
        chart.update();
        debug!("Transaction chart updated for {}", period.as_str());
    }

    fn update_payment_method_chart(&mut self) {
        let t = &self.ctx.translator;
        let chart = &mut self.ctx.charts.payment_methods;
        chart.set_labels(demo::PAYMENT_METHODS.iter().map(|method| t.t(method, &[])));
        chart.set_data(0, demo::PAYMENT_METHOD_SHARES);
        chart.update();
    }

    // ==================== Forms ====================

    async fn create_transaction(&mut self, form: &FormData) {
        let request = match forms::new_transaction(form) {
            Ok(request) => request,
            Err(e) => {
                info!("Transaction form rejected: {}", e);
                self.alert_invalid(&e);
                return;
            }
        };

        match self.ctx.api.create_payment(&request).await {
            Ok(_) => {
                info!("Created transaction for merchant {}", request.merchant_id);
                self.alert("transaction_created", &[]);
                self.close_modal();
                let ticket = self.current_ticket();
                if self.current_page == Some(PageId::Transactions) {
                    self.load_transactions(ticket).await;
                }
                self.load_recent_transactions(ticket).await;
            }
            Err(e) => {
                warn!("Failed to create transaction: {}", e);
                self.alert_rejection(&e, "transaction_create_failed");
            }
        }
    }

    async fn create_merchant(&mut self, form: &FormData) {
        let request = match forms::new_merchant(form) {
            Ok(request) => request,
            Err(e) => {
                info!("Merchant form rejected: {}", e);
                self.alert_invalid(&e);
                return;
            }
        };

        match self.ctx.api.create_merchant(&request).await {
            Ok(_) => {
                info!("Created merchant {}", request.business_name);
                self.alert("merchant_created", &[]);
                self.close_modal();
                if self.current_page == Some(PageId::Merchants) {
                    let ticket = self.current_ticket();
                    self.load_merchants(ticket).await;
                }
            }
            Err(e) => {
                warn!("Failed to create merchant: {}", e);
                self.alert_rejection(&e, "merchant_create_failed");
            }
        }
    }

    async fn calculate_fee(&mut self) {
        let doc = self.ctx.document.as_ref();
        let amount = doc.value(ElementId::CalcAmount.dom_id());
        let card_type = doc.value(ElementId::CalcCardType.dom_id());
        let merchant = doc.value(ElementId::CalcMerchant.dom_id());

        let request = match forms::fee_request(amount.as_deref(), card_type.as_deref(), merchant.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                self.alert_invalid(&e);
                return;
            }
        };

        match self.ctx.api.calculate_fee(&request).await {
            Ok(result) => {
                let doc = self.ctx.document.as_mut();
                doc.set_text(ElementId::ResultAmount.dom_id(), &render::format_currency(result.amount));
                doc.set_text(ElementId::ResultFee.dom_id(), &render::format_currency(result.fee));
                doc.set_text(ElementId::ResultNet.dom_id(), &render::format_currency(result.net_amount));
                doc.set_visible(ElementId::CalculationResult.dom_id(), true);
            }
            Err(e) => {
                warn!("Fee calculation failed: {}", e);
                match e.server_message() {
                    Some(message) => {
                        let message = message.to_string();
                        self.alert("fee_calculation_failed", &[("message", message.as_str())]);
                    }
                    None => self.alert("fee_calculation_retry", &[]),
                }
            }
        }
    }

    async fn update_revenue_analytics(&mut self) {
        let doc = self.ctx.document.as_ref();
        let start = doc.value(ElementId::RevenueStartDate.dom_id());
        let end = doc.value(ElementId::RevenueEndDate.dom_id());

        match forms::date_range(start.as_deref(), end.as_deref()) {
            Ok((start, end)) => {
                let ticket = self.current_ticket();
                self.load_revenue_analytics(ticket, start, end).await;
            }
            Err(e) => self.alert_invalid(&e),
        }
    }

    fn show_billing_config(&mut self) {
        let defaults = BillingConfig::default();
        let values = [
            defaults.european_card_percentage.to_string(),
            format!("{:.2}", defaults.european_card_fixed_fee),
            defaults.non_european_card_percentage.to_string(),
            format!("{:.2}", defaults.non_european_card_fixed_fee),
            format!("{:.2}", defaults.chargeback_fee),
            format!("{:.2}", defaults.refund_fee),
            defaults.billing_cycle.clone(),
            defaults.auto_billing_enabled.to_string(),
        ];

        let doc = self.ctx.document.as_mut();
        for ((id, _), value) in BILLING_FIELDS.iter().zip(values.iter()) {
            doc.set_value(id.dom_id(), value);
        }
        doc.set_visible(ElementId::BillingConfigModal.dom_id(), true);
    }

    fn save_billing_config(&mut self) {
        let doc = self.ctx.document.as_ref();
        let form = BILLING_FIELDS
            .iter()
            .fold(FormData::new(), |form, (id, field)| {
                form.with(field, &doc.value(id.dom_id()).unwrap_or_default())
            });

        match forms::billing_config(&form) {
            Ok(config) => {
                info!(?config, "Billing configuration saved");
                self.alert("billing_config_saved", &[]);
                self.ctx
                    .document
                    .set_visible(ElementId::BillingConfigModal.dom_id(), false);
            }
            Err(e) => self.alert_invalid(&e),
        }
    }

    // ==================== Notifications ====================

    fn alert(&mut self, key: &str, params: &[(&str, &str)]) {
        let message = self.ctx.translator.t(key, params);
        self.ctx.notifier.alert(&message);
    }

    fn confirm(&mut self, key: &str, params: &[(&str, &str)]) -> bool {
        let message = self.ctx.translator.t(key, params);
        self.ctx.notifier.confirm(&message)
    }

    fn alert_invalid(&mut self, error: &DashboardError) {
        match error {
            DashboardError::InvalidInput { field, .. } if field == "amount" => {
                self.alert("invalid_amount", &[])
            }
            DashboardError::InvalidInput { field, .. } if field == "start_date" || field == "end_date" => {
                self.alert("select_date_range", &[])
            }
            DashboardError::InvalidInput { field, .. } => self.alert("invalid_field", &[("field", field.as_str())]),
            other => {
                let message = other.to_string();
                self.alert("error_with_message", &[("message", message.as_str())])
            }
        }
    }

    /// Server text when the server gave one, `generic_key` otherwise.
    fn alert_rejection(&mut self, error: &DashboardError, generic_key: &str) {
        match error.server_message() {
            Some(message) => self.alert("error_with_message", &[("message", message)]),
            None => self.alert(generic_key, &[]),
        }
    }

    fn show_modal(&mut self, title: &str, body: Vec<Fragment>) {
        let doc = self.ctx.document.as_mut();
        doc.set_text(ElementId::ModalTitle.dom_id(), title);
        doc.replace_children(ElementId::ModalBody.dom_id(), body);
        doc.set_class(ElementId::ModalOverlay.dom_id(), "active", true);
    }

    fn close_modal(&mut self) {
        self.ctx
            .document
            .set_class(ElementId::ModalOverlay.dom_id(), "active", false);
    }
}

/// Live records, or the demo set when the fetch failed or came back empty.
fn or_demo<T>(
    what: &str,
    result: Result<Vec<T>, DashboardError>,
    demo: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match result {
        Ok(records) if !records.is_empty() => {
            debug!("Loaded {} {}", records.len(), what);
            records
        }
        Ok(_) => {
            info!("No {} returned, showing demo data", what);
            demo()
        }
        Err(e) => {
            warn!("Failed to load {}, showing demo data: {}", what, e);
            demo()
        }
    }
}

fn render_platform_revenue(ctx: &mut AppContext, revenue: &RevenueSummary) {
    let total = render::format_currency(revenue.total_revenue);
    let doc = ctx.document.as_mut();
    doc.set_text(ElementId::TotalPlatformRevenue.dom_id(), &total);
    doc.set_text(ElementId::MonthlyRevenue.dom_id(), &total);
    if let Some(average) = revenue.average_fee() {
        doc.set_text(
            ElementId::AverageFeePerTransaction.dom_id(),
            &render::format_currency(average),
        );
    }
}

fn render_revenue_analytics(ctx: &mut AppContext, revenue: &RevenueSummary) {
    let doc = ctx.document.as_mut();
    let money = [
        (ElementId::TransactionFeesTotal, revenue.transaction_fees),
        (ElementId::EuropeanFees, revenue.european_fees()),
        (ElementId::NonEuropeanFees, revenue.non_european_fees()),
        (ElementId::OtherFeesTotal, revenue.other_fees()),
        (ElementId::ChargebackFees, revenue.chargeback_fees),
        (ElementId::RefundFees, revenue.refund_fees),
    ];
    for (id, amount) in money {
        doc.set_text(id.dom_id(), &render::format_currency(amount));
    }
    doc.set_text(
        ElementId::ActiveMerchantsCount.dom_id(),
        &revenue.active_merchants.to_string(),
    );
    if let Some(average) = revenue.average_per_merchant() {
        doc.set_text(
            ElementId::AvgRevenuePerMerchant.dom_id(),
            &render::format_currency(average),
        );
    }
}
