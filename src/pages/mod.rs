//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `screens` holds the guarded screens, `login` the public one, and `status`
//! the spinner, denial and not-found outcomes. [`render_screen`] maps a
//! route-table `Screen` onto its component.

pub mod login;
pub mod screens;
pub mod status;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::routing::table::Screen;
use login::LoginPage;
use screens::{
    ActivityLogsPage, AnalyticsPage, BooksPage, DashboardPage, IssueReturnPage, MembersPage, ScannerPage,
    SettingsPage, TransactionsPage,
};
use status::NotFoundPage;

/// Instantiate the component behind a screen reference.
pub fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
        Screen::Books => view! { <BooksPage/> }.into_any(),
        Screen::Members => view! { <MembersPage/> }.into_any(),
        Screen::Transactions => view! { <TransactionsPage/> }.into_any(),
        Screen::IssueReturn => view! { <IssueReturnPage/> }.into_any(),
        Screen::Scanner => view! { <ScannerPage/> }.into_any(),
        Screen::Analytics => view! { <AnalyticsPage/> }.into_any(),
        Screen::ActivityLogs => view! { <ActivityLogsPage/> }.into_any(),
        Screen::Settings => view! { <SettingsPage/> }.into_any(),
        Screen::Login => view! { <LoginPage/> }.into_any(),
        Screen::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
