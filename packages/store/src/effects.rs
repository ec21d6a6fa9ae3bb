/// Requests the reducer hands to the runtime.
///
/// Each variant maps to exactly one backend call. The runtime reports the
/// outcome back as an [`crate::Event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchIdentity,
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
    Logout,
    LoadPosts,
    CreatePost {
        title: String,
        content: String,
    },
}
