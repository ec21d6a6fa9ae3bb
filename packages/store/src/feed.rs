use crate::models::Post;

/// The ordered posts currently shown, newest first.
///
/// The feed is only ever replaced wholesale from a fetch or grown by one post
/// at the front after a local create; it is never edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence with a freshly fetched one.
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Put a newly created post in front of everything else.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of posts currently shown.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl From<Vec<Post>> for Feed {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}
