use leptos::*;

use act_boundary::Activity;

#[component]
pub fn ActivityCard<F>(name: String, activity: Activity, on_unregister: F) -> impl IntoView
where
    F: Fn(String, String) + Copy + 'static,
{
    let spots_left = activity.spots_left();
    let Activity {
        description,
        schedule,
        participants,
        ..
    } = activity;
    let activity_name = StoredValue::new(name.clone());
    let has_participants = !participants.is_empty();

    view! {
      <div class="overflow-hidden bg-white rounded-lg shadow p-5">
        <h4 class="text-lg font-semibold text-gray-900">{ name }</h4>
        <p class="mt-1 text-sm text-gray-500">{ description }</p>
        <p class="mt-1 text-sm text-gray-500">
          <strong>"Schedule: "</strong>
          { schedule }
        </p>
        <p class="mt-1 text-sm text-gray-500">
          <strong>"Availability: "</strong>
          { format!("{spots_left} spots left") }
        </p>
        <div class="mt-3 border-t border-gray-200 pt-3">
          <strong class="text-sm text-gray-900">"Participants:"</strong>
          { if has_participants {
              view! {
                <ul role="list" class="divide-y divide-gray-100">
                  <For
                    each = move || participants.clone()
                    key = |email| email.clone()
                    children = move |email| view! {
                      <ParticipantListItem
                        activity = activity_name.get_value()
                        email
                        on_unregister
                      />
                    }
                  />
                </ul>
              }.into_view()
            } else {
              view! {
                <p class="text-sm text-gray-500 italic">"No participants yet."</p>
              }.into_view()
            }
          }
        </div>
      </div>
    }
}

#[component]
fn ParticipantListItem<F>(activity: String, email: String, on_unregister: F) -> impl IntoView
where
    F: Fn(String, String) + Copy + 'static,
{
    let unregister_label = format!("Unregister {email}");
    let entry = StoredValue::new((activity, email.clone()));

    view! {
      <li class="flex items-center justify-between gap-x-4 py-2">
        <span class="text-sm text-gray-700">{ email }</span>
        <button
          type="button"
          class="rounded bg-white px-2 py-1 text-xs font-semibold text-red-700 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-red-50"
          aria-label = unregister_label
          on:click = move |_| {
            let (activity, email) = entry.get_value();
            on_unregister(activity, email);
          }
        >
          "✖"
        </button>
      </li>
    }
}
