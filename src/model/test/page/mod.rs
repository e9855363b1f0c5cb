use crate::model::{
    cidade::CidadeFilter,
    page::{item_links, page_links, PageQuery, PageRequest, PaginatedResponse},
};

mod envelope;
mod item_link_set;
mod navigation_links;
mod normalize;
