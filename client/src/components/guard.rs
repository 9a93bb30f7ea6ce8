//! Route-level access control wrapper.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::{AppRoute, GuardDecision};
use crate::state::session::SessionStore;

/// Render `children` only if `route`'s guard allows it; otherwise redirect.
///
/// The decision tracks the session signal, so it is re-evaluated on every
/// mount and again whenever the session is established or evicted.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || {
        let decision = route.guard(session.is_authenticated());
        match decision {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::Redirect(path) => {
                view! { <Redirect path=path options=decision.navigate_options()/> }.into_any()
            }
        }
    }
}
