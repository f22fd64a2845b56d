mod access_token;
mod ingredient;
mod requests;
mod responses;
mod test_user;

pub use access_token::AccessToken;
pub use ingredient::{Ingredient, IngredientHash};
pub use requests::{Credentials, NewOrder, ProfileUpdate, Registration};
pub use responses::{
    AuthResponse, CreatedOrder, CreatedOrderResponse, ErrorResponse, IngredientsResponse,
    OrderSummary, OrdersResponse, UserInfo, UserResponse,
};
pub use test_user::TestUser;
