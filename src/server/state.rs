use crate::server::upstream::user_directory::UserDirectory;

#[derive(Clone)]
pub(crate) struct AppState {
    user_directory: UserDirectory,
}

impl AppState {
    pub fn new(user_directory: UserDirectory) -> Self {
        Self {
            user_directory,
        }
    }

    pub fn get_user_directory(&self) -> &UserDirectory {
        &self.user_directory
    }
}
