// Managers module
// YAML-driven construction and ownership of components by handle name

pub mod tab_list;

pub use tab_list::{
    create_tab, create_tab_list_from_config, initial_selection, validate_tab_list_config, TabConfigYaml,
    TabListConfigYaml, TabListManager,
};
