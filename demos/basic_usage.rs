use ntstatus_erref::{Lookup, NtError, NtStatus, StatusLog, aliases, error, name};

/// Pull the status field out of an SMB2 response header.
///
/// The status sits at byte offset 8, little-endian.
fn smb2_status(header: &[u8]) -> Option<NtStatus> {
    let bytes: [u8; 4] = header.get(8..12)?.try_into().ok()?;
    Some(NtStatus::new(u32::from_le_bytes(bytes)))
}

fn check(status: NtStatus) -> Result<(), NtError> {
    match error(status) {
        Lookup::Success => Ok(()),
        Lookup::Failure(err) if status.is_success() => {
            // Informational values such as PENDING are not failures for this caller.
            println!("   note: {}", err.message());
            Ok(())
        }
        Lookup::Failure(err) => Err(err),
        Lookup::Unknown => {
            println!("   uncatalogued status {}", status.hex());
            Ok(())
        }
    }
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // Protocol id, header length, credit charge, then the status field.
    let responses: [[u8; 12]; 4] = [
        [0xFE, b'S', b'M', b'B', 64, 0, 1, 0, 0x00, 0x00, 0x00, 0x00],
        [0xFE, b'S', b'M', b'B', 64, 0, 1, 0, 0x03, 0x01, 0x00, 0x00],
        [0xFE, b'S', b'M', b'B', 64, 0, 1, 0, 0x22, 0x00, 0x00, 0xC0],
        [0xFE, b'S', b'M', b'B', 64, 0, 1, 0, 0xEF, 0xBE, 0xAD, 0xDE],
    ];

    for header in &responses {
        let Some(status) = smb2_status(header) else {
            continue;
        };

        println!("{} ({})", name(status), status.hex());

        match check(status) {
            Ok(()) => println!("   ok"),
            Err(err) => {
                println!("   error: {err}");
                err.with_log(|log| println!("   log:   {log}"));
            }
        }
    }

    println!("\n--- Unknown Values In Logs ---\n");
    println!("{}", StatusLog::from_status(NtStatus::new(0xDEAD_BEEF)));

    println!("\n--- Aliases ---\n");
    let status = NtStatus::new(0xC022_0018);
    println!("{} is published as {:?}", status.hex(), aliases(status).as_slice());
}
