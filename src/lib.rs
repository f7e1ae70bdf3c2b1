pub mod configuration;
pub mod engine;

pub mod holiday {
    pub mod holidayerror;
    pub mod holidayrule;
    pub mod holidayruleset;
    pub mod holidayoccurrence;
    pub mod materializer;
    pub mod holidayqueryengine;
}

pub mod jurisdiction {
    pub mod jurisdiction;
    pub mod jurisdictionregistry;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod store {
    pub mod holidaystore;
    pub mod inmemoryholidaystore;
}

pub mod time {
    pub mod utility;
    pub mod eastercalculator;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod repentancedayholiday;
    }
}
