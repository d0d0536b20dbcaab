use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">
          <div class="pt-2 font-bold">
            <A href=Page::Home.path()>"Activity Signup"</A>
          </div>
        </div>
      </nav>
    }
}
