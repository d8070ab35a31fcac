pub mod shared {
    pub mod http {
        pub mod responses;
    }
}

pub mod modules {
    pub mod scores {
        pub mod core {
            pub mod actions;
            pub mod rules;
            pub mod score;
        }
        pub mod use_cases {
            pub mod calculate_score {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_score {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod action_source;
                pub mod demo_action_source;
                pub mod score_repository;
                pub mod score_repository_in_memory;
            }
        }
    }
    pub mod health {
        pub mod use_cases {
            pub mod check_health {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
