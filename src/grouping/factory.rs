use crate::core::library::GroupType;
use crate::grouping::author_grouping::AuthorGrouping;
use crate::grouping::title_grouping::TitleGrouping;
use crate::grouping::GroupingStrategy;

pub fn create_group_strategy(group_type: GroupType) -> Box<dyn GroupingStrategy> {
    match group_type {
        GroupType::Author => Box::new(AuthorGrouping::new()),
        GroupType::Title => Box::new(TitleGrouping::new()),
    }
}
