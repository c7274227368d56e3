use crate::models::Session;
use crate::ui::messages::info;

pub fn handle(session: &Session) {
    match session {
        Session::Authenticated { user_id, name } => {
            info(format!("Logged in as {name} ({user_id})"));
        }
        Session::Anonymous => info("Not logged in."),
    }
}
