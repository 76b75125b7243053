pub mod configuration;

pub mod integration;

pub mod math {
    pub mod function {
        pub mod realfunction;
        pub mod expressioncompiler;
        pub mod mevalcompiler;
    }

    pub mod quadrature {
        pub mod quadrature;
        pub mod quadratureerror;
        pub mod simpsonrule;
        pub mod rectanglerule;
    }
}

pub mod plot {
    pub mod figure;
    pub mod plotconfig;
    pub mod plotrenderer;
}

pub use integration::{
    Integrator,
    rectangle_rule,
    simpson_rule
};
pub use math::quadrature::quadrature::QuadratureResult;
pub use math::quadrature::quadratureerror::QuadratureError;
