use crate::core::library::RemoveType;
use crate::removal::author_removal::AuthorRemoval;
use crate::removal::title_removal::TitleRemoval;
use crate::removal::RemovalStrategy;

pub fn create_removal_strategy(remove_type: RemoveType, target: &str) -> Box<dyn RemovalStrategy> {
    match remove_type {
        RemoveType::Author => Box::new(AuthorRemoval::new(target)),
        RemoveType::Title => Box::new(TitleRemoval::new(target)),
    }
}
