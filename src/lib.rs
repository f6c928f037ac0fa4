pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod http;
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod decision;
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod seed;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod execute;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
                pub mod view;
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registry_in_memory;
                pub mod registry_store;
            }
        }
    }
}

pub mod shell;
