//! Click handlers of the event list view and the collaborators they talk to.
//!
//! Every browser dependency (router, `localStorage`, `window.confirm`, HTTP)
//! is a trait here so the flows run the same under test as in the page.
//! Network failures are logged and swallowed; nothing in this module
//! returns an error to the caller.

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::{
    auth::AuthContext, error::EventApiError, routes::AppPath, view::ViewAction, EventsResponse,
};

/// Prompt shown before an event is deleted.
pub const DELETE_CONFIRM_MESSAGE: &str = "Do you want to delete this event?";

/// Changes the current route.
pub trait Navigator {
    /// Navigate to `path`.
    fn navigate(&self, path: &AppPath);
}

/// Source of the bearer credential sent with privileged requests.
pub trait CredentialProvider {
    /// Stored token, if any.
    fn bearer_token(&self) -> Option<String>;
}

/// Blocking yes/no prompt.
pub trait Confirmation {
    /// `true` when the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Response of the delete endpoint. Any status counts as a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body, only ever logged.
    pub body: String,
}

impl DeleteResponse {
    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote event service.
#[async_trait(?Send)]
pub trait EventApi {
    /// `GET /api/getevents`. Non-success statuses are errors.
    async fn fetch_events(&self) -> Result<EventsResponse, EventApiError>;

    /// `DELETE /api/delete/{id}`, authorized with `token` when present.
    ///
    /// Only transport failures are errors; the status is reported in the
    /// [`DeleteResponse`].
    async fn delete_event(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<DeleteResponse, EventApiError>;
}

/// What a handler ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Route changed to the given path.
    Navigated(AppPath),
    /// The visitor lacks the capability for this action.
    NotPermitted,
    /// The visitor declined the confirmation prompt.
    Cancelled,
    /// The delete call completed with `status` and the view left for home.
    Deleted {
        /// HTTP status of the delete response.
        status: u16,
    },
    /// The delete call never got a response.
    Failed,
}

/// Fetch both collections once.
///
/// Returns the action to feed into the view state, or `None` after logging
/// the failure, in which case the lists simply stay empty.
pub async fn load_events<A>(api: &A) -> Option<ViewAction>
where
    A: EventApi + ?Sized,
{
    match api.fetch_events().await {
        Ok(response) => Some(ViewAction::Loaded(response)),
        Err(err) => {
            error!(error = %err, "failed to fetch events");
            None
        },
    }
}

/// Card click: detail page for signed-in visitors, login otherwise.
pub fn select_event<N>(auth: AuthContext, id: &str, nav: &N) -> ActionOutcome
where
    N: Navigator + ?Sized,
{
    let target = if auth.is_authenticated {
        AppPath::EventDetail(id.to_string())
    } else {
        AppPath::Login
    };
    nav.navigate(&target);
    ActionOutcome::Navigated(target)
}

/// "Update" click. Admin only; the edit route does its own checks.
pub fn request_update<N>(auth: AuthContext, id: &str, nav: &N) -> ActionOutcome
where
    N: Navigator + ?Sized,
{
    if !auth.can_manage_events() {
        warn!(event_id = id, "update requested without admin rights");
        return ActionOutcome::NotPermitted;
    }
    let target = AppPath::UpdateEvent(id.to_string());
    nav.navigate(&target);
    ActionOutcome::Navigated(target)
}

/// "Delete" click. Admin only.
///
/// After confirmation the delete request is sent with the stored bearer
/// token. Whatever status comes back, the view moves to the list route and
/// then straight on to home. A transport failure is logged and the view
/// stays where it is. Concurrent deletes are not deduplicated.
pub async fn request_delete<A, C, P, N>(
    auth: AuthContext,
    id: &str,
    confirm: &C,
    api: &A,
    creds: &P,
    nav: &N,
) -> ActionOutcome
where
    A: EventApi + ?Sized,
    C: Confirmation + ?Sized,
    P: CredentialProvider + ?Sized,
    N: Navigator + ?Sized,
{
    if !auth.can_manage_events() {
        warn!(event_id = id, "delete requested without admin rights");
        return ActionOutcome::NotPermitted;
    }
    if !confirm.confirm(DELETE_CONFIRM_MESSAGE) {
        return ActionOutcome::Cancelled;
    }

    let token = creds.bearer_token();
    if token.is_none() {
        warn!(event_id = id, "no bearer token stored, sending delete unauthenticated");
    }

    match api.delete_event(id, token.as_deref()).await {
        Ok(response) => {
            if response.is_success() {
                info!(event_id = id, status = response.status, "event deleted");
            } else {
                warn!(
                    event_id = id,
                    status = response.status,
                    body = %response.body,
                    "delete rejected by the event service"
                );
            }
            // Two hops: the list route first, then home.
            nav.navigate(&AppPath::EventList);
            nav.navigate(&AppPath::Home);
            ActionOutcome::Deleted {
                status: response.status,
            }
        },
        Err(err) => {
            error!(event_id = id, error = %err, "error deleting event");
            ActionOutcome::Failed
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<AppPath>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &AppPath) {
            self.visited.borrow_mut().push(path.clone());
        }
    }

    struct FixedConfirmation(bool);

    impl Confirmation for FixedConfirmation {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, DELETE_CONFIRM_MESSAGE);
            self.0
        }
    }

    struct StoredToken(Option<&'static str>);

    impl CredentialProvider for StoredToken {
        fn bearer_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct StubApi {
        fetch: Result<EventsResponse, EventApiError>,
        delete: Result<DeleteResponse, EventApiError>,
        deletes: RefCell<Vec<(String, Option<String>)>>,
    }

    impl StubApi {
        fn deleting(delete: Result<DeleteResponse, EventApiError>) -> Self {
            Self {
                fetch: Ok(EventsResponse::default()),
                delete,
                deletes: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EventApi for StubApi {
        async fn fetch_events(&self) -> Result<EventsResponse, EventApiError> {
            self.fetch.clone()
        }

        async fn delete_event(
            &self,
            id: &str,
            token: Option<&str>,
        ) -> Result<DeleteResponse, EventApiError> {
            self.deletes
                .borrow_mut()
                .push((id.to_string(), token.map(str::to_string)));
            self.delete.clone()
        }
    }

    fn ok_delete(status: u16) -> Result<DeleteResponse, EventApiError> {
        Ok(DeleteResponse {
            status,
            body: String::new(),
        })
    }

    #[test]
    fn select_routes_by_authentication() {
        let nav = RecordingNavigator::default();
        assert_eq!(
            select_event(AuthContext::user(), "e1", &nav),
            ActionOutcome::Navigated(AppPath::EventDetail("e1".into()))
        );
        assert_eq!(
            select_event(AuthContext::anonymous(), "e1", &nav),
            ActionOutcome::Navigated(AppPath::Login)
        );
        assert_eq!(
            *nav.visited.borrow(),
            vec![AppPath::EventDetail("e1".into()), AppPath::Login]
        );
    }

    #[test]
    fn update_requires_admin() {
        let nav = RecordingNavigator::default();
        assert_eq!(request_update(AuthContext::user(), "e1", &nav), ActionOutcome::NotPermitted);
        assert!(nav.visited.borrow().is_empty());

        assert_eq!(
            request_update(AuthContext::admin(), "e1", &nav),
            ActionOutcome::Navigated(AppPath::UpdateEvent("e1".into()))
        );
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let api = StubApi::deleting(ok_delete(200));
        let nav = RecordingNavigator::default();
        let outcome = request_delete(
            AuthContext::admin(),
            "e1",
            &FixedConfirmation(false),
            &api,
            &StoredToken(Some("t")),
            &nav,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(api.deletes.borrow().is_empty());
        assert!(nav.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn non_admin_delete_is_refused_before_prompting() {
        struct NeverAsked;
        impl Confirmation for NeverAsked {
            fn confirm(&self, _message: &str) -> bool {
                panic!("prompt shown to a non-admin");
            }
        }

        let api = StubApi::deleting(ok_delete(200));
        let nav = RecordingNavigator::default();
        let outcome =
            request_delete(AuthContext::user(), "e1", &NeverAsked, &api, &StoredToken(None), &nav)
                .await;
        assert_eq!(outcome, ActionOutcome::NotPermitted);
        assert!(api.deletes.borrow().is_empty());
    }

    #[tokio::test]
    async fn rejected_delete_still_lands_on_home() {
        let api = StubApi::deleting(Ok(DeleteResponse {
            status: 403,
            body: r#"{"message":"forbidden"}"#.into(),
        }));
        let nav = RecordingNavigator::default();
        let outcome = request_delete(
            AuthContext::admin(),
            "e9",
            &FixedConfirmation(true),
            &api,
            &StoredToken(Some("jwt")),
            &nav,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Deleted {
            status: 403
        });
        assert_eq!(*api.deletes.borrow(), vec![("e9".to_string(), Some("jwt".to_string()))]);
        assert_eq!(*nav.visited.borrow(), vec![AppPath::EventList, AppPath::Home]);
    }

    #[tokio::test]
    async fn network_failure_on_delete_stays_put() {
        let api = StubApi::deleting(Err(EventApiError::Network("offline".into())));
        let nav = RecordingNavigator::default();
        let outcome = request_delete(
            AuthContext::admin(),
            "e1",
            &FixedConfirmation(true),
            &api,
            &StoredToken(None),
            &nav,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(*api.deletes.borrow(), vec![("e1".to_string(), None)]);
        assert!(nav.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn load_failure_yields_no_action() {
        let api = StubApi {
            fetch: Err(EventApiError::Status {
                status: 502,
                body: "bad gateway".into(),
            }),
            delete: ok_delete(200),
            deletes: RefCell::new(Vec::new()),
        };
        assert!(load_events(&api).await.is_none());
    }
}
