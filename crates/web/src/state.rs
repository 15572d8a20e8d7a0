use storage::Database;

use crate::cache::ResponseCache;
use crate::middleware::auth::AuthTokens;
use crate::notify::ChangeNotifier;

/// Everything a handler needs, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: ResponseCache,
    pub notifier: ChangeNotifier,
    pub auth: AuthTokens,
}
