use leptos::*;
use leptos_router::*;

use act_frontend_api as api;

mod pages;
use pages::*;

mod components;
use components::*;

mod state;

// The page is served by the same origin as the API, so requests go to the
// document root.
const DEFAULT_API_URL: &str = "";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let public_api = api::PublicApi::new(DEFAULT_API_URL.to_string());

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home public_api=public_api.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
