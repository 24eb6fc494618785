pub mod accounts_reader;
