pub mod ledger_service;
pub mod ranking;
pub mod valuation_service;
