//! Adapter: three transports with incompatible APIs are wrapped so a client
//! can send messages through any of them via `MessageSender`.

use crate::console::Console;

/// The interface the client is written against.
pub trait MessageSender {
    /// Returns `true` once the message was handed to the transport.
    fn send(&self, message: &str, out: &dyn Console) -> bool;
}

// ----------------------------------------------------------------------------
// Adaptees
// ----------------------------------------------------------------------------

/// Wants an owned datagram.
#[derive(Debug, Default)]
pub struct UdpComm;

impl UdpComm {
    pub fn send_datagram(&self, packet: Vec<u8>, out: &dyn Console) {
        out.line(&format!("UDP: Sending packet of size {}", packet.len()));
    }
}

/// Wants a raw byte buffer.
#[derive(Debug, Default)]
pub struct SerialComm;

impl SerialComm {
    pub fn transmit_bytes(&self, buffer: &[u8], out: &dyn Console) {
        out.line(&format!("Serial: Transmitting {} bytes", buffer.len()));
    }
}

/// Already takes text, just under a different name.
#[derive(Debug, Default)]
pub struct SharedMemoryComm;

impl SharedMemoryComm {
    pub fn push_data(&self, payload: &str, out: &dyn Console) {
        out.line(&format!("Shared Memory: Pushing payload: {payload}"));
    }
}

// ----------------------------------------------------------------------------
// Adapters (each owns its adaptee)
// ----------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct UdpAdapter {
    adaptee: UdpComm,
}

#[derive(Debug, Default)]
pub struct SerialAdapter {
    adaptee: SerialComm,
}

#[derive(Debug, Default)]
pub struct SharedMemoryAdapter {
    adaptee: SharedMemoryComm,
}

impl MessageSender for UdpAdapter {
    fn send(&self, message: &str, out: &dyn Console) -> bool {
        let packet = message.as_bytes().to_vec();
        self.adaptee.send_datagram(packet, out);
        true
    }
}

impl MessageSender for SerialAdapter {
    fn send(&self, message: &str, out: &dyn Console) -> bool {
        self.adaptee.transmit_bytes(message.as_bytes(), out);
        true
    }
}

impl MessageSender for SharedMemoryAdapter {
    fn send(&self, message: &str, out: &dyn Console) -> bool {
        self.adaptee.push_data(message, out);
        true
    }
}

/// Borrows whichever adapter is active; the adapter can be swapped at runtime.
pub struct Client<'a> {
    sender: &'a dyn MessageSender,
}

impl<'a> Client<'a> {
    pub fn new(sender: &'a dyn MessageSender) -> Self {
        Client { sender }
    }

    pub fn change_adapter(&mut self, sender: &'a dyn MessageSender) {
        self.sender = sender;
    }

    pub fn send_message(&self, message: &str, out: &dyn Console) -> bool {
        self.sender.send(message, out)
    }
}

pub fn demo(out: &dyn Console) {
    let udp = UdpAdapter::default();
    let serial = SerialAdapter::default();
    let shared_memory = SharedMemoryAdapter::default();

    let mut client = Client::new(&udp);
    client.send_message("Hello via UDP!", out);
    client.change_adapter(&serial);
    client.send_message("Hello via Serial!", out);
    client.change_adapter(&shared_memory);
    client.send_message("Hello via Shared Memory!", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_adapters_translate_to_adaptee_calls() {
        let out = MemoryConsole::new();
        assert!(UdpAdapter::default().send("abc", &out));
        assert!(SerialAdapter::default().send("abcd", &out));
        assert!(SharedMemoryAdapter::default().send("hi", &out));

        assert_eq!(
            out.lines(),
            vec![
                "UDP: Sending packet of size 3",
                "Serial: Transmitting 4 bytes",
                "Shared Memory: Pushing payload: hi",
            ]
        );
    }

    #[test]
    fn test_sizes_are_in_bytes_not_chars() {
        let out = MemoryConsole::new();
        SerialAdapter::default().send("é", &out);
        assert!(out.contains("Serial: Transmitting 2 bytes"));
    }

    #[test]
    fn test_demo_switches_adapters() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec![
                "UDP: Sending packet of size 14",
                "Serial: Transmitting 17 bytes",
                "Shared Memory: Pushing payload: Hello via Shared Memory!",
            ]
        );
    }
}
