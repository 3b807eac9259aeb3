pub mod games;
pub mod scores;
pub mod users;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
pub use users::Entity as Users;
pub use users::Model as User;
