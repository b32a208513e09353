pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod scalarfunction;
        pub mod benchmarkfunction;
    }

    pub mod differentiation {
        pub mod differenceformula;
        pub mod differenceformulamanager;
    }

    pub mod integration {
        pub mod quadratureruleerror;
        pub mod quadraturerule;
        pub mod quadraturerulemanager;
    }

    pub mod convergence {
        pub mod convergenceerror;
        pub mod convergenceseries;
        pub mod convergencestudy;
    }
}
