use std::time::Duration;

use leptos::*;

use act_frontend_api::PublicApi;

use crate::{
    components::*,
    state::{error_message, SignupRequest, UnregisterRequest, ViewState},
};

/// Delay before the reconciling reload after a successful signup, giving the
/// server time to finish processing.
const RELOAD_DELAY: Duration = Duration::from_millis(300);

const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

#[component]
pub fn Home(public_api: PublicApi) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(ViewState::Loading);
    let notices = RwSignal::new(NoticeBoard::default());
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    // -- actions -- //

    let fetch_activities = Action::new({
        let api = public_api.clone();
        move |()| {
            let api = api.clone();
            async move {
                match api.activities().await {
                    Ok(activities) => {
                        state.set(ViewState::Rendered(activities));
                    }
                    Err(err) => {
                        log::error!("Unable to fetch activities: {err}");
                        state.set(ViewState::Failed);
                    }
                }
            }
        }
    });

    let signup = Action::new({
        let api = public_api.clone();
        move |request: &SignupRequest| {
            let api = api.clone();
            let SignupRequest { activity, email } = request.clone();
            async move {
                set_wait_for_response.set(true);
                let result = api.signup(&activity, &email).await;
                set_wait_for_response.set(false);
                match result {
                    Ok(reply) => {
                        // Show the new participant immediately; the reload
                        // below reconciles counts and any server-side
                        // discrepancies.
                        state.update(|s| {
                            s.insert_participant(&activity, &email);
                        });
                        show_notice(notices, NoticeKind::Success, reply.message);
                        set_timeout(
                            move || {
                                fetch_activities.dispatch(());
                            },
                            RELOAD_DELAY,
                        );
                        true
                    }
                    Err(err) => {
                        log::warn!("Unable to sign up {email} for {activity}: {err}");
                        show_notice(
                            notices,
                            NoticeKind::Error,
                            error_message(&err, SIGNUP_FAILED),
                        );
                        false
                    }
                }
            }
        }
    });

    let unregister = Action::new(move |request: &UnregisterRequest| {
        let api = public_api.clone();
        let UnregisterRequest { activity, email } = request.clone();
        async move {
            match api.unregister(&activity, &email).await {
                Ok(reply) => {
                    show_notice(notices, NoticeKind::Success, reply.message);
                    fetch_activities.dispatch(());
                }
                Err(err) => {
                    log::warn!("Unable to unregister {email} from {activity}: {err}");
                    show_notice(
                        notices,
                        NoticeKind::Error,
                        error_message(&err, UNREGISTER_FAILED),
                    );
                }
            }
        }
    });

    // -- callbacks -- //

    let on_unregister = move |activity: String, email: String| {
        let prompt = format!("Unregister {email} from {activity}?");
        let confirmed = window().confirm_with_message(&prompt).unwrap_or(false);
        if confirmed {
            unregister.dispatch(UnregisterRequest { activity, email });
        }
    };

    fetch_activities.dispatch(());

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <NoticeView notices />
          <div class="block bg-white shadow-lg rounded-lg p-6 mb-6">
            <SignupForm
              activities = Signal::derive(move || state.with(ViewState::activity_names))
              action = signup
              disabled = wait_for_response.into()
            />
          </div>
          <div class="flex items-center justify-between mb-4">
            <h3 class="text-xl font-semibold">"Activities"</h3>
            <button
              type="button"
              class="rounded bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
              on:click=move |_| {
                  fetch_activities.dispatch(());
              }
            >
              "Refresh"
            </button>
          </div>
          { move || match state.get() {
              ViewState::Loading => view! {
                <p class="text-gray-500">"Loading activities ..."</p>
              }.into_view(),
              ViewState::Failed => view! {
                <p class="text-gray-500">{ LOAD_FAILED }</p>
              }.into_view(),
              ViewState::Rendered(activities) => {
                if activities.is_empty() {
                  view! {
                    <p class="text-gray-500">"No activities could be found."</p>
                  }.into_view()
                } else {
                  view! {
                    <div class="grid gap-4 md:grid-cols-2">
                      <For
                        each = move || activities.clone()
                        key = |(name, _)| name.clone()
                        children = move |(name, activity)| view! {
                          <ActivityCard name activity on_unregister />
                        }
                      />
                    </div>
                  }.into_view()
                }
              }
            }
          }
        </div>
      </section>
    }
}
