use leptos::{ev, *};

use crate::state::SignupRequest;

#[component]
pub fn SignupForm(
    activities: Signal<Vec<String>>,
    action: Action<SignupRequest, bool>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());

    let request = Signal::derive(move || {
        email.with(|email| {
            let email = email.trim();
            if email.is_empty() {
                return None;
            }
            activity.with(|activity| {
                if activity.is_empty() {
                    return None;
                }
                // Clone the signal data at the very last moment
                Some(SignupRequest {
                    activity: activity.clone(),
                    email: email.to_owned(),
                })
            })
        })
    });

    let submit_disabled = Signal::derive(move || disabled.get() || request.get().is_none());

    let submit = move || {
        if let Some(request) = request.get() {
            action.dispatch(request);
        }
    };

    // clear the form after a successful signup
    Effect::new(move |_| {
        if action.value().get() == Some(true) {
            set_email.update(String::clear);
            set_activity.update(String::clear);
        }
    });

    view! {
      <form on:submit=|ev| ev.prevent_default()>
        <h4 class="text-xl font-semibold mb-4">"Sign up for an activity"</h4>
        <div class="mb-4">
          <input
            type = "email"
            required
            placeholder = "Email address"
            class="form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:outline-none"
            prop:value = move || email.get()
            prop:disabled = move || disabled.get()
            on:keyup = move |ev: ev::KeyboardEvent| {
              let val = event_target_value(&ev);
              set_email.update(|v| *v = val);
            }
            // The `change` event fires when the browser fills the form automatically,
            on:change = move |ev| {
              let val = event_target_value(&ev);
              set_email.update(|v| *v = val);
            }
          />
        </div>
        <div class="mb-4">
          <select
            required
            class="form-select block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:outline-none"
            prop:value = move || activity.get()
            prop:disabled = move || disabled.get()
            on:change = move |ev| {
              let val = event_target_value(&ev);
              set_activity.update(|v| *v = val);
            }
          >
            <option value="">"-- Select an activity --"</option>
            <For
              each = move || activities.get()
              key = |name| name.clone()
              children = move |name| {
                let value = name.clone();
                view! { <option value=value>{ name }</option> }
              }
            />
          </select>
        </div>
        <button
          prop:disabled = move || submit_disabled.get()
          on:click = move |_| submit()
          class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:shadow-lg focus:shadow-lg focus:outline-none focus:ring-0 active:shadow-lg transition duration-150 ease-in-out w-full mb-3 bg-blue-100"
        >
          "Sign Up"
        </button>
      </form>
    }
}
