use crate::dashboards::OverviewDashboard;
use crate::domain::a001_supplier::ui::cards::SupplierCards;
use crate::domain::a001_supplier::ui::compact::SupplierCompactList;
use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::layout::Shell;
use crate::pages::{BatchesPage, NotFoundPage, PurchasesPage, RecipesPage, ReportsPage, SalesPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Маршруты приложения. Каждая страница монтируется заново при переходе,
/// поэтому её состояние (View Options) живёт только пока она открыта.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/purchases") view=PurchasesPage />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/suppliers/compact") view=SupplierCompactList />
                    <Route path=path!("/suppliers/cards") view=SupplierCards />
                    <Route path=path!("/sales") view=SalesPage />
                    <Route path=path!("/recipes") view=RecipesPage />
                    <Route path=path!("/batches") view=BatchesPage />
                    <Route path=path!("/reports") view=ReportsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
