pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod http_error;
    }
}

pub mod modules {
    pub mod recipes {
        pub mod core {
            pub mod active_data;
            pub mod aroma_tags;
            pub mod brew_method;
            pub mod filter;
            pub mod mapping;
            pub mod recipe;
            pub mod record;
            pub mod taste_profile;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_recipes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_recipe_book {
                pub mod recipe_book;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_client;
                pub mod in_memory;
                pub mod json_file;
                pub mod recipe_repository;
                pub mod sqlite;
            }
        }
    }
    pub mod brewing {
        pub mod core {
            pub mod phase;
            pub mod ports;
            pub mod session;
            pub mod timer;
        }
        pub mod use_cases {
            pub mod run_brewing_session {
                pub mod controller;
                pub mod wake_lock_guard;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod capabilities;
            }
        }
    }
}

pub mod shell;
