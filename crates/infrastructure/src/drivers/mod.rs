mod rtu;

pub use rtu::RtuTransport;
