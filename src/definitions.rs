//! The NTSTATUS catalog.
//!
//! # Source
//!
//! Values, identifiers and descriptions follow Microsoft Open Specifications
//! [MS-ERREF] §2.3.1, "NTSTATUS Values". Identifiers are stored without the
//! `STATUS_` prefix (`STATUS_ACCESS_DENIED` becomes `ACCESS_DENIED`);
//! identifiers that never carried it (`DBG_CONTINUE`, `RPC_NT_*`) are kept
//! as published. Descriptions are lowercased and otherwise verbatim,
//! including printf-style placeholders.
//!
//! # Layout
//!
//! Rows are grouped by severity, then facility, in ascending value order:
//!
//! - `0x0000_xxxx` .. `0x3FFF_xxxx` success
//! - `0x4000_xxxx` .. `0x7FFF_xxxx` informational
//! - `0x8000_xxxx` .. `0xBFFF_xxxx` warning
//! - `0xC000_xxxx` .. `0xFFFF_xxxx` error
//!
//! # Aliases
//!
//! A few values are published under more than one identifier. The catalog
//! keeps the identifier MS-ERREF lists first; the others are exported as
//! plain constants through `define_status_aliases!` and listed in
//! [`ALIASES`].
//!
//! # Governance
//!
//! A value may appear only once in the catalog; a duplicate fails the build
//! through the `unreachable_patterns` lint on `lookup`. The `tests` module
//! at the bottom of this file checks the remaining structural rules.
//!
//! [MS-ERREF]: https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-erref/

use crate::macros::{define_nt_status, define_status_aliases};

define_nt_status! {
    // -------------------------------------------------------------------------
    // Success (0x0000_0000 - 0x3FFF_FFFF)
    // -------------------------------------------------------------------------
    SUCCESS = (0x00000000, "the operation completed successfully."),
    WAIT_1 = (0x00000001, "the caller specified wait timed out."),
    WAIT_2 = (0x00000002, "the caller specified wait timed out."),
    WAIT_3 = (0x00000003, "the caller specified wait timed out."),
    WAIT_63 = (0x0000003F, "the caller specified wait timed out."),
    ABANDONED = (0x00000080, "the caller attempted to wait for a mutex that has been abandoned."),
    ABANDONED_WAIT_63 = (0x000000BF, "the caller attempted to wait for a mutex that has been abandoned."),
    USER_APC = (0x000000C0, "a user-mode apc was delivered before the given interval expired."),
    ALERTED = (0x00000101, "the delay completed because the thread was alerted."),
    TIMEOUT = (0x00000102, "the given timeout interval expired."),
    PENDING = (0x00000103, "the operation that was requested is pending completion."),
    REPARSE = (0x00000104, "a reparse should be performed by the object manager because the name of the file resulted in a symbolic link."),
    MORE_ENTRIES = (0x00000105, "returned by enumeration apis to indicate more information is available to successive calls."),
    NOT_ALL_ASSIGNED = (0x00000106, "indicates not all privileges or groups that are referenced are assigned to the caller. this allows, for example, all privileges to be disabled without having to know exactly which privileges are assigned."),
    SOME_NOT_MAPPED = (0x00000107, "some of the information to be translated has not been translated."),
    OPLOCK_BREAK_IN_PROGRESS = (0x00000108, "an open/create operation completed while an opportunistic lock (oplock) break is underway."),
    VOLUME_MOUNTED = (0x00000109, "a new volume has been mounted by a file system."),
    RXACT_COMMITTED = (0x0000010A, "this success level status indicates that the transaction state already exists for the registry subtree but that a transaction commit was previously aborted. the commit has now been completed."),
    NOTIFY_CLEANUP = (0x0000010B, "indicates that a notify change request has been completed due to closing the handle that made the notify change request."),
    NOTIFY_ENUM_DIR = (0x0000010C, "indicates that a notify change request is being completed and that the information is not being returned in the caller's buffer. the caller now needs to enumerate the files to find the changes."),
    NO_QUOTAS_FOR_ACCOUNT = (0x0000010D, "{no quotas} no system quota limits are specifically set for this account."),
    PRIMARY_TRANSPORT_CONNECT_FAILED = (0x0000010E, "{connect failure on primary transport} an attempt was made to connect to the remote server %hs on the primary transport, but the connection failed. the computer was able to connect on a secondary transport."),
    PAGE_FAULT_TRANSITION = (0x00000110, "the page fault was a transition fault."),
    PAGE_FAULT_DEMAND_ZERO = (0x00000111, "the page fault was a demand zero fault."),
    PAGE_FAULT_COPY_ON_WRITE = (0x00000112, "the page fault was a demand zero fault."),
    PAGE_FAULT_GUARD_PAGE = (0x00000113, "the page fault was a demand zero fault."),
    PAGE_FAULT_PAGING_FILE = (0x00000114, "the page fault was satisfied by reading from a secondary storage device."),
    CACHE_PAGE_LOCKED = (0x00000115, "the cached page was locked during operation."),
    CRASH_DUMP = (0x00000116, "the crash dump exists in a paging file."),
    BUFFER_ALL_ZEROS = (0x00000117, "the specified buffer contains all zeros."),
    REPARSE_OBJECT = (0x00000118, "a reparse should be performed by the object manager because the name of the file resulted in a symbolic link."),
    RESOURCE_REQUIREMENTS_CHANGED = (0x00000119, "the device has succeeded a query-stop and its resource requirements have changed."),
    TRANSLATION_COMPLETE = (0x00000120, "the translator has translated these resources into the global space and no additional translations should be performed."),
    DS_MEMBERSHIP_EVALUATED_LOCALLY = (0x00000121, "the directory service evaluated group memberships locally, because it was unable to contact a global catalog server."),
    NOTHING_TO_TERMINATE = (0x00000122, "a process being terminated has no threads to terminate."),
    PROCESS_NOT_IN_JOB = (0x00000123, "the specified process is not part of a job."),
    PROCESS_IN_JOB = (0x00000124, "the specified process is part of a job."),
    VOLSNAP_HIBERNATE_READY = (0x00000125, "{volume shadow copy service} the system is now ready for hibernation."),
    FSFILTER_OP_COMPLETED_SUCCESSFULLY = (0x00000126, "a file system or file system filter driver has successfully completed an fsfilter operation."),
    INTERRUPT_VECTOR_ALREADY_CONNECTED = (0x00000127, "the specified interrupt vector was already connected."),
    INTERRUPT_STILL_CONNECTED = (0x00000128, "the specified interrupt vector is still connected."),
    PROCESS_CLONED = (0x00000129, "the current process is a cloned process."),
    FILE_LOCKED_WITH_ONLY_READERS = (0x0000012A, "the file was locked and all users of the file can only read."),
    FILE_LOCKED_WITH_WRITERS = (0x0000012B, "the file was locked and at least one user of the file can write."),
    RESOURCEMANAGER_READ_ONLY = (0x00000202, "the specified resourcemanager made no changes or updates to the resource under this transaction."),
    WAIT_FOR_OPLOCK = (0x00000367, "an operation is blocked and waiting for an oplock."),
    DBG_EXCEPTION_HANDLED = (0x00010001, "debugger handled the exception."),
    DBG_CONTINUE = (0x00010002, "the debugger continued."),
    FLT_IO_COMPLETE = (0x001C0001, "the io was completed by a filter."),

    // -------------------------------------------------------------------------
    // Informational (0x4000_0000 - 0x7FFF_FFFF)
    // -------------------------------------------------------------------------
    OBJECT_NAME_EXISTS = (0x40000000, "{object exists} an attempt was made to create an object but the object name already exists."),
    THREAD_WAS_SUSPENDED = (0x40000001, "{thread suspended} a thread termination occurred while the thread was suspended. the thread resumed, and termination proceeded."),
    WORKING_SET_LIMIT_RANGE = (0x40000002, "{working set range error} an attempt was made to set the working set minimum or maximum to values that are outside the allowable range."),
    IMAGE_NOT_AT_BASE = (0x40000003, "{image relocated} an image file could not be mapped at the address that is specified in the image file. local fixups must be performed on this image."),
    RXACT_STATE_CREATED = (0x40000004, "this informational level status indicates that a specified registry subtree transaction state did not yet exist and had to be created."),
    SEGMENT_NOTIFICATION = (0x40000005, "{segment load} a virtual dos machine (vdm) is loading, unloading, or moving an ms-dos or win16 program segment image. an exception is raised so that a debugger can load, unload, or track symbols and breakpoints within these 16-bit segments."),
    LOCAL_USER_SESSION_KEY = (0x40000006, "{local session key} a user session key was requested for a local remote procedure call (rpc) connection. the session key that is returned is a constant value and not unique to this connection."),
    BAD_CURRENT_DIRECTORY = (0x40000007, "{invalid current directory} the process cannot switch to the startup current directory %hs. select ok to set the current directory to %hs, or select cancel to exit."),
    SERIAL_MORE_WRITES = (0x40000008, "{serial ioctl complete} a serial i/o operation was completed by another write to a serial port. (the ioctl_serial_xoff_counter reached zero.)"),
    REGISTRY_RECOVERED = (0x40000009, "{registry recovery} one of the files that contains the system registry data had to be recovered by using a log or alternate copy. the recovery was successful."),
    FT_READ_RECOVERY_FROM_BACKUP = (0x4000000A, "{redundant read} to satisfy a read request, the windows nt operating system fault-tolerant file system successfully read the requested data from a redundant copy. this was done because the file system encountered a failure on a member of the fault-tolerant volume but was unable to reassign the failing area of the device."),
    FT_WRITE_RECOVERY = (0x4000000B, "{redundant write} to satisfy a write request, the windows nt fault-tolerant file system successfully wrote a redundant copy of the information. this was done because the file system encountered a failure on a member of the fault-tolerant volume but was unable to reassign the failing area of the device."),
    SERIAL_COUNTER_TIMEOUT = (0x4000000C, "{serial ioctl timeout} a serial i/o operation completed because the time-out period expired. (the ioctl_serial_xoff_counter had not reached zero.)"),
    NULL_LM_PASSWORD = (0x4000000D, "{password too complex} the windows password is too complex to be converted to a lan manager password. the lan manager password that returned is a null string."),
    IMAGE_MACHINE_TYPE_MISMATCH = (0x4000000E, "{machine type mismatch} the image file %hs is valid but is for a machine type other than the current machine. select ok to continue, or cancel to fail the dll load."),
    RECEIVE_PARTIAL = (0x4000000F, "{partial data received} the network transport returned partial data to its client. the remaining data will be sent later."),
    RECEIVE_EXPEDITED = (0x40000010, "{expedited data received} the network transport returned data to its client that was marked as expedited by the remote system."),
    RECEIVE_PARTIAL_EXPEDITED = (0x40000011, "{partial expedited data received} the network transport returned partial data to its client and this data was marked as expedited by the remote system. the remaining data will be sent later."),
    EVENT_DONE = (0x40000012, "{tdi event done} the tdi indication has completed successfully."),
    EVENT_PENDING = (0x40000013, "{tdi event pending} the tdi indication has entered the pending state."),
    CHECKING_FILE_SYSTEM = (0x40000014, "checking file system on %wz."),
    FATAL_APP_EXIT = (0x40000015, "{fatal application exit} %hs"),
    PREDEFINED_HANDLE = (0x40000016, "the specified registry key is referenced by a predefined handle."),
    WAS_UNLOCKED = (0x40000017, "{page unlocked} the page protection of a locked page was changed to 'no access' and the page was unlocked from memory and from the process."),
    SERVICE_NOTIFICATION = (0x40000018, "%hs"),
    WAS_LOCKED = (0x40000019, "{page locked} one of the pages to lock was already locked."),
    LOG_HARD_ERROR = (0x4000001A, "application popup: %1 : %2"),
    ALREADY_WIN32 = (0x4000001B, "a win32 process already exists."),
    WX86_UNSIMULATE = (0x4000001C, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_CONTINUE = (0x4000001D, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_SINGLE_STEP = (0x4000001E, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_BREAKPOINT = (0x4000001F, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_EXCEPTION_CONTINUE = (0x40000020, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_EXCEPTION_LASTCHANCE = (0x40000021, "an exception status code that is used by the win32 x86 emulation subsystem."),
    WX86_EXCEPTION_CHAIN = (0x40000022, "an exception status code that is used by the win32 x86 emulation subsystem."),
    IMAGE_MACHINE_TYPE_MISMATCH_EXE = (0x40000023, "{machine type mismatch} the image file %hs is valid but is for a machine type other than the current machine."),
    NO_YIELD_PERFORMED = (0x40000024, "a yield execution was performed and no thread was available to run."),
    TIMER_RESUME_IGNORED = (0x40000025, "the resume flag to a timer api was ignored."),
    ARBITRATION_UNHANDLED = (0x40000026, "the arbiter has deferred arbitration of these resources to its parent."),
    CARDBUS_NOT_SUPPORTED = (0x40000027, "the device has detected a cardbus card in its slot."),
    WX86_CREATEWX86TIB = (0x40000028, "an exception status code that is used by the win32 x86 emulation subsystem."),
    MP_PROCESSOR_MISMATCH = (0x40000029, "the cpus in this multiprocessor system are not all the same revision level. to use all processors, the operating system restricts itself to the features of the least capable processor in the system. if problems occur with this system, contact the cpu manufacturer to see if this mix of processors is supported."),
    HIBERNATED = (0x4000002A, "the system was put into hibernation."),
    RESUME_HIBERNATION = (0x4000002B, "the system was resumed from hibernation."),
    FIRMWARE_UPDATED = (0x4000002C, "windows has detected that the system firmware (bios) was updated [previous firmware date = %2, current firmware date %3]."),
    DRIVERS_LEAKING_LOCKED_PAGES = (0x4000002D, "a device driver is leaking locked i/o pages and is causing system degradation. the system has automatically enabled the tracking code to try and catch the culprit."),
    MESSAGE_RETRIEVED = (0x4000002E, "the alpc message being canceled has already been retrieved from the queue on the other side."),
    SYSTEM_POWERSTATE_TRANSITION = (0x4000002F, "the system power state is transitioning from %2 to %3."),
    ALPC_CHECK_COMPLETION_LIST = (0x40000030, "the receive operation was successful. check the alpc completion list for the received message."),
    SYSTEM_POWERSTATE_COMPLEX_TRANSITION = (0x40000031, "the system power state is transitioning from %2 to %3 but could enter %4."),
    ACCESS_AUDIT_BY_POLICY = (0x40000032, "access to %1 is monitored by policy rule %2."),
    ABANDON_HIBERFILE = (0x40000033, "a valid hibernation file has been invalidated and should be abandoned."),
    BIZRULES_NOT_ENABLED = (0x40000034, "business rule scripts are disabled for the calling application."),
    WAKE_SYSTEM = (0x40000294, "the system has awoken."),
    DS_SHUTTING_DOWN = (0x40000370, "the directory service is shutting down."),
    DBG_REPLY_LATER = (0x40010001, "debugger will reply later."),
    DBG_UNABLE_TO_PROVIDE_HANDLE = (0x40010002, "debugger cannot provide a handle."),
    DBG_TERMINATE_THREAD = (0x40010003, "debugger terminated the thread."),
    DBG_TERMINATE_PROCESS = (0x40010004, "debugger terminated the process."),
    DBG_CONTROL_C = (0x40010005, "debugger obtained control of c."),
    DBG_PRINTEXCEPTION_C = (0x40010006, "debugger printed an exception on control c."),
    DBG_RIPEXCEPTION = (0x40010007, "debugger received a rip exception."),
    DBG_CONTROL_BREAK = (0x40010008, "debugger received a control break."),
    DBG_COMMAND_EXCEPTION = (0x40010009, "debugger command communication exception."),
    RPC_NT_UUID_LOCAL_ONLY = (0x40020056, "a uuid that is valid only on this computer has been allocated."),
    RPC_NT_SEND_INCOMPLETE = (0x400200AF, "some data remains to be sent in the request buffer."),
    CTX_CDM_CONNECT = (0x400A0004, "the client drive mapping service has connected on terminal connection."),
    CTX_CDM_DISCONNECT = (0x400A0005, "the client drive mapping service has disconnected on terminal connection."),
    SXS_RELEASE_ACTIVATION_CONTEXT = (0x4015000D, "a kernel mode component is releasing a reference on an activation context."),
    RECOVERY_NOT_NEEDED = (0x40190034, "the transactional resource manager is already consistent. recovery is not needed."),
    RM_ALREADY_STARTED = (0x40190035, "the transactional resource manager has already been started."),
    LOG_NO_RESTART = (0x401A000C, "the log service encountered a log stream with no restart area."),
    VIDEO_DRIVER_DEBUG_REPORT_REQUEST = (0x401B00EC, "{display driver recovered from failure} the %hs display driver has detected a failure and recovered from it. some graphical operations may have failed. the next time you restart the machine, a dialog box appears, giving you an opportunity to upload data about this failure to microsoft."),
    GRAPHICS_PARTIAL_DATA_POPULATED = (0x401E000A, "the specified buffer is not big enough to contain the entire requested dataset. partial data is populated up to the size of the buffer. the caller needs to provide a buffer of the size as specified in the partially populated buffer's content (interface specific)."),
    GRAPHICS_DRIVER_MISMATCH = (0x401E0117, "the kernel driver detected a version mismatch between it and the user mode driver."),
    GRAPHICS_MODE_NOT_PINNED = (0x401E0307, "no mode is pinned on the specified vidpn source/target."),
    GRAPHICS_NO_PREFERRED_MODE = (0x401E031E, "the specified mode set does not specify a preference for one of its modes."),
    GRAPHICS_DATASET_IS_EMPTY = (0x401E034B, "the specified dataset (for example, mode set, frequency range set, descriptor set, or topology) is empty."),
    GRAPHICS_NO_MORE_ELEMENTS_IN_DATASET = (0x401E034C, "the specified dataset (for example, mode set, frequency range set, descriptor set, or topology) does not contain any more elements."),
    GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_PINNED = (0x401E0351, "the specified content transformation is not pinned on the specified vidpn present path."),
    GRAPHICS_UNKNOWN_CHILD_STATUS = (0x401E042F, "the child device presence was not reliably detected."),
    GRAPHICS_LEADLINK_START_DEFERRED = (0x401E0437, "starting the lead adapter in a linked configuration has been temporarily deferred."),
    GRAPHICS_POLLING_TOO_FREQUENTLY = (0x401E0439, "the display adapter is being polled for children too frequently at the same polling level."),
    GRAPHICS_START_DEFERRED = (0x401E043A, "starting the adapter has been temporarily deferred."),
    NDIS_INDICATION_REQUIRED = (0x40230001, "the request will be completed later by an ndis status indication."),

    // -------------------------------------------------------------------------
    // Warning (0x8000_0000 - 0xBFFF_FFFF)
    // -------------------------------------------------------------------------
    GUARD_PAGE_VIOLATION = (0x80000001, "{exception} guard page exception a page of memory that marks the end of a data structure, such as a stack or an array, has been accessed."),
    DATATYPE_MISALIGNMENT = (0x80000002, "{exception} alignment fault a data type misalignment was detected in a load or store instruction."),
    BREAKPOINT = (0x80000003, "{exception} breakpoint a breakpoint has been reached."),
    SINGLE_STEP = (0x80000004, "{exception} single step a single step or trace operation has just been completed."),
    BUFFER_OVERFLOW = (0x80000005, "{buffer overflow} the data was too large to fit into the specified buffer."),
    NO_MORE_FILES = (0x80000006, "{no more files} no more files were found which match the file specification."),
    WAKE_SYSTEM_DEBUGGER = (0x80000007, "{kernel debugger awakened} the system debugger was awakened by an interrupt."),
    HANDLES_CLOSED = (0x8000000A, "{handles closed} handles to objects have been automatically closed because of the requested operation."),
    NO_INHERITANCE = (0x8000000B, "{non-inheritable acl} an access control list (acl) contains no components that can be inherited."),
    GUID_SUBSTITUTION_MADE = (0x8000000C, "{guid substitution} during the translation of a globally unique identifier (guid) to a windows security id (sid), no administratively defined guid prefix was found. a substitute prefix was used, which will not compromise system security. however, this may provide a more restrictive access than intended."),
    PARTIAL_COPY = (0x8000000D, "because of protection conflicts, not all the requested bytes could be copied."),
    DEVICE_PAPER_EMPTY = (0x8000000E, "{out of paper} the printer is out of paper."),
    DEVICE_POWERED_OFF = (0x8000000F, "{device power is off} the printer power has been turned off."),
    DEVICE_OFF_LINE = (0x80000010, "{device offline} the printer has been taken offline."),
    DEVICE_BUSY = (0x80000011, "{device busy} the device is currently busy."),
    NO_MORE_EAS = (0x80000012, "{no more eas} no more extended attributes (eas) were found for the file."),
    INVALID_EA_NAME = (0x80000013, "{illegal ea} the specified extended attribute (ea) name contains at least one illegal character."),
    EA_LIST_INCONSISTENT = (0x80000014, "{inconsistent ea list} the extended attribute (ea) list is inconsistent."),
    INVALID_EA_FLAG = (0x80000015, "{invalid ea flag} an invalid extended attribute (ea) flag was set."),
    VERIFY_REQUIRED = (0x80000016, "{verifying disk} the media has changed and a verify operation is in progress; therefore, no reads or writes may be performed to the device, except those that are used in the verify operation."),
    EXTRANEOUS_INFORMATION = (0x80000017, "{too much information} the specified access control list (acl) contained more information than was expected."),
    RXACT_COMMIT_NECESSARY = (0x80000018, "this warning level status indicates that the transaction state already exists for the registry subtree, but that a transaction commit was previously aborted. the commit has not been completed but has not been rolled back either; therefore, it may still be committed, if needed."),
    NO_MORE_ENTRIES = (0x8000001A, "{no more entries} no more entries are available from an enumeration operation."),
    FILEMARK_DETECTED = (0x8000001B, "{filemark found} a filemark was detected."),
    MEDIA_CHANGED = (0x8000001C, "{media changed} the media may have changed."),
    BUS_RESET = (0x8000001D, "{i/o bus reset} an i/o bus reset was detected."),
    END_OF_MEDIA = (0x8000001E, "{end of media} the end of the media was encountered."),
    BEGINNING_OF_MEDIA = (0x8000001F, "the beginning of a tape or partition has been detected."),
    MEDIA_CHECK = (0x80000020, "{media changed} the media may have changed."),
    SETMARK_DETECTED = (0x80000021, "a tape access reached a set mark."),
    NO_DATA_DETECTED = (0x80000022, "during a tape access, the end of the data written is reached."),
    REDIRECTOR_HAS_OPEN_HANDLES = (0x80000023, "the redirector is in use and cannot be unloaded."),
    SERVER_HAS_OPEN_HANDLES = (0x80000024, "the server is in use and cannot be unloaded."),
    ALREADY_DISCONNECTED = (0x80000025, "the specified connection has already been disconnected."),
    LONGJUMP = (0x80000026, "a long jump has been executed."),
    CLEANER_CARTRIDGE_INSTALLED = (0x80000027, "a cleaner cartridge is present in the tape library."),
    PLUGPLAY_QUERY_VETOED = (0x80000028, "the plug and play query operation was not successful."),
    UNWIND_CONSOLIDATE = (0x80000029, "a frame consolidation has been executed."),
    REGISTRY_HIVE_RECOVERED = (0x8000002A, "{registry hive recovered} the registry hive (file): %hs was corrupted and it has been recovered. some data might have been lost."),
    DLL_MIGHT_BE_INSECURE = (0x8000002B, "the application is attempting to run executable code from the module %hs. this may be insecure. an alternative, %hs, is available. should the application use the secure module %hs?"),
    DLL_MIGHT_BE_INCOMPATIBLE = (0x8000002C, "the application is loading executable code from the module %hs. this is secure but may be incompatible with previous releases of the operating system. an alternative, %hs, is available. should the application use the secure module %hs?"),
    STOPPED_ON_SYMLINK = (0x8000002D, "the create operation stopped after reaching a symbolic link."),
    DEVICE_REQUIRES_CLEANING = (0x80000288, "the device has indicated that cleaning is necessary."),
    DEVICE_DOOR_OPEN = (0x80000289, "the device has indicated that its door is open. further operations require it closed and secured."),
    DATA_LOST_REPAIR = (0x80000803, "windows discovered a corruption in the file %hs. this file has now been repaired. check if any data in the file was lost because of the corruption."),
    DBG_EXCEPTION_NOT_HANDLED = (0x80010001, "debugger did not handle the exception."),
    CLUSTER_NODE_ALREADY_UP = (0x80130001, "the cluster node is already up."),
    CLUSTER_NODE_ALREADY_DOWN = (0x80130002, "the cluster node is already down."),
    CLUSTER_NETWORK_ALREADY_ONLINE = (0x80130003, "the cluster network is already online."),
    CLUSTER_NETWORK_ALREADY_OFFLINE = (0x80130004, "the cluster network is already offline."),
    CLUSTER_NODE_ALREADY_MEMBER = (0x80130005, "the cluster node is already a member of the cluster."),
    COULD_NOT_RESIZE_LOG = (0x80190009, "the log could not be set to the requested size."),
    NO_TXF_METADATA = (0x80190029, "there is no transaction metadata on the file."),
    CANT_RECOVER_WITH_HANDLE_OPEN = (0x80190031, "the file cannot be recovered because there is a handle still open on it."),
    TXF_METADATA_ALREADY_PRESENT = (0x80190041, "transaction metadata is already present on this file and cannot be superseded."),
    TRANSACTION_SCOPE_CALLBACKS_NOT_SET = (0x80190042, "a transaction scope could not be entered because the scope handler has not been initialized."),
    VIDEO_HUNG_DISPLAY_DRIVER_THREAD_RECOVERED = (0x801B00EB, "{display driver stopped responding and recovered} the %hs display driver has stopped working normally. the recovery had been performed."),
    FLT_BUFFER_TOO_SMALL = (0x801C0001, "{buffer too small} the buffer is too small to contain the entry. no information has been written to the buffer."),
    FVE_PARTIAL_METADATA = (0x80210001, "volume metadata read or write is incomplete."),
    FVE_TRANSIENT_STATE = (0x80210002, "bitlocker encryption keys were ignored because the volume was in a transient state."),

    // -------------------------------------------------------------------------
    // Error (0xC000_0000 - 0xFFFF_FFFF): general
    // -------------------------------------------------------------------------
    UNSUCCESSFUL = (0xC0000001, "{operation failed} the requested operation was unsuccessful."),
    NOT_IMPLEMENTED = (0xC0000002, "{not implemented} the requested operation is not implemented."),
    INVALID_INFO_CLASS = (0xC0000003, "{invalid parameter} the specified information class is not a valid information class for the specified object."),
    INFO_LENGTH_MISMATCH = (0xC0000004, "the specified information record length does not match the length that is required for the specified information class."),
    ACCESS_VIOLATION = (0xC0000005, "the instruction at 0x%08lx referenced memory at 0x%08lx. the memory could not be %s."),
    IN_PAGE_ERROR = (0xC0000006, "the instruction at 0x%08lx referenced memory at 0x%08lx. the required data was not placed into memory because of an i/o error status of 0x%08lx."),
    PAGEFILE_QUOTA = (0xC0000007, "the page file quota for the process has been exhausted."),
    INVALID_HANDLE = (0xC0000008, "an invalid handle was specified."),
    BAD_INITIAL_STACK = (0xC0000009, "an invalid initial stack was specified in a call to ntcreatethread."),
    BAD_INITIAL_PC = (0xC000000A, "an invalid initial start address was specified in a call to ntcreatethread."),
    INVALID_CID = (0xC000000B, "an invalid client id was specified."),
    TIMER_NOT_CANCELED = (0xC000000C, "an attempt was made to cancel or set a timer that has an associated apc and the specified thread is not the thread that originally set the timer with an associated apc routine."),
    INVALID_PARAMETER = (0xC000000D, "an invalid parameter was passed to a service or function."),
    NO_SUCH_DEVICE = (0xC000000E, "a device that does not exist was specified."),
    NO_SUCH_FILE = (0xC000000F, "{file not found} the file %hs does not exist."),
    INVALID_DEVICE_REQUEST = (0xC0000010, "the specified request is not a valid operation for the target device."),
    END_OF_FILE = (0xC0000011, "the end-of-file marker has been reached. there is no valid data in the file beyond this marker."),
    WRONG_VOLUME = (0xC0000012, "{wrong volume} the wrong volume is in the drive. insert volume %hs into drive %hs."),
    NO_MEDIA_IN_DEVICE = (0xC0000013, "{no disk} there is no disk in the drive. insert a disk into drive %hs."),
    UNRECOGNIZED_MEDIA = (0xC0000014, "{unknown disk format} the disk in drive %hs is not formatted properly. check the disk, and reformat it, if needed."),
    NONEXISTENT_SECTOR = (0xC0000015, "{sector not found} the specified sector does not exist."),
    MORE_PROCESSING_REQUIRED = (0xC0000016, "{still busy} the specified i/o request packet (irp) cannot be disposed of because the i/o operation is not complete."),
    NO_MEMORY = (0xC0000017, "{not enough quota} not enough virtual memory or paging file quota is available to complete the specified operation."),
    CONFLICTING_ADDRESSES = (0xC0000018, "{conflicting address range} the specified address range conflicts with the address space."),
    NOT_MAPPED_VIEW = (0xC0000019, "the address range to unmap is not a mapped view."),
    UNABLE_TO_FREE_VM = (0xC000001A, "the virtual memory cannot be freed."),
    UNABLE_TO_DELETE_SECTION = (0xC000001B, "the specified section cannot be deleted."),
    INVALID_SYSTEM_SERVICE = (0xC000001C, "an invalid system service was specified in a system service call."),
    ILLEGAL_INSTRUCTION = (0xC000001D, "{exception} illegal instruction an attempt was made to execute an illegal instruction."),
    INVALID_LOCK_SEQUENCE = (0xC000001E, "{invalid lock sequence} an attempt was made to execute an invalid lock sequence."),
    INVALID_VIEW_SIZE = (0xC000001F, "{invalid mapping} an attempt was made to create a view for a section that is bigger than the section."),
    INVALID_FILE_FOR_SECTION = (0xC0000020, "{bad file} the attributes of the specified mapping file for a section of memory cannot be read."),
    ALREADY_COMMITTED = (0xC0000021, "{already committed} the specified address range is already committed."),
    ACCESS_DENIED = (0xC0000022, "{access denied} a process has requested access to an object but has not been granted those access rights."),
    BUFFER_TOO_SMALL = (0xC0000023, "{buffer too small} the buffer is too small to contain the entry. no information has been written to the buffer."),
    OBJECT_TYPE_MISMATCH = (0xC0000024, "{wrong type} there is a mismatch between the type of object that is required by the requested operation and the type of object that is specified in the request."),
    NONCONTINUABLE_EXCEPTION = (0xC0000025, "{exception} cannot continue windows cannot continue from this exception."),
    INVALID_DISPOSITION = (0xC0000026, "an invalid exception disposition was returned by an exception handler."),
    UNWIND = (0xC0000027, "unwind exception code."),
    BAD_STACK = (0xC0000028, "an invalid or unaligned stack was encountered during an unwind operation."),
    INVALID_UNWIND_TARGET = (0xC0000029, "an invalid unwind target was encountered during an unwind operation."),
    NOT_LOCKED = (0xC000002A, "an attempt was made to unlock a page of memory that was not locked."),
    PARITY_ERROR = (0xC000002B, "a device parity error on an i/o operation."),
    UNABLE_TO_DECOMMIT_VM = (0xC000002C, "an attempt was made to decommit uncommitted virtual memory."),
    NOT_COMMITTED = (0xC000002D, "an attempt was made to change the attributes on memory that has not been committed."),
    INVALID_PORT_ATTRIBUTES = (0xC000002E, "invalid object attributes specified to ntcreateport or invalid port attributes specified to ntconnectport."),
    PORT_MESSAGE_TOO_LONG = (0xC000002F, "the length of the message that was passed to ntrequestport or ntrequestwaitreplyport is longer than the maximum message that is allowed by the port."),
    INVALID_PARAMETER_MIX = (0xC0000030, "an invalid combination of parameters was specified."),
    INVALID_QUOTA_LOWER = (0xC0000031, "an attempt was made to lower a quota limit below the current usage."),
    DISK_CORRUPT_ERROR = (0xC0000032, "{corrupt disk} the file system structure on the disk is corrupt and unusable. run the chkdsk utility on the volume %hs."),
    OBJECT_NAME_INVALID = (0xC0000033, "the object name is invalid."),
    OBJECT_NAME_NOT_FOUND = (0xC0000034, "the object name is not found."),
    OBJECT_NAME_COLLISION = (0xC0000035, "the object name already exists."),
    PORT_DISCONNECTED = (0xC0000037, "an attempt was made to send a message to a disconnected communication port."),
    DEVICE_ALREADY_ATTACHED = (0xC0000038, "an attempt was made to attach to a device that was already attached to another device."),
    OBJECT_PATH_INVALID = (0xC0000039, "the object path component was not a directory object."),
    OBJECT_PATH_NOT_FOUND = (0xC000003A, "{path not found} the path %hs does not exist."),
    OBJECT_PATH_SYNTAX_BAD = (0xC000003B, "the object path component was not a directory object."),
    DATA_OVERRUN = (0xC000003C, "{data overrun} a data overrun error occurred."),
    DATA_LATE_ERROR = (0xC000003D, "{data late} a data late error occurred."),
    DATA_ERROR = (0xC000003E, "{data error} an error occurred in reading or writing data."),
    CRC_ERROR = (0xC000003F, "{bad crc} a cyclic redundancy check (crc) checksum error occurred."),
    SECTION_TOO_BIG = (0xC0000040, "{section too large} the specified section is too big to map the file."),
    PORT_CONNECTION_REFUSED = (0xC0000041, "the ntconnectport request is refused."),
    INVALID_PORT_HANDLE = (0xC0000042, "the type of port handle is invalid for the operation that is requested."),
    SHARING_VIOLATION = (0xC0000043, "a file cannot be opened because the share access flags are incompatible."),
    QUOTA_EXCEEDED = (0xC0000044, "insufficient quota exists to complete the operation."),
    INVALID_PAGE_PROTECTION = (0xC0000045, "the specified page protection was not valid."),
    MUTANT_NOT_OWNED = (0xC0000046, "an attempt to release a mutant object was made by a thread that was not the owner of the mutant object."),
    SEMAPHORE_LIMIT_EXCEEDED = (0xC0000047, "an attempt was made to release a semaphore such that its maximum count would have been exceeded."),
    PORT_ALREADY_SET = (0xC0000048, "an attempt was made to set the debugport or exceptionport of a process, but a port already exists in the process, or an attempt was made to set the completionport of a file but a port was already set in the file, or an attempt was made to set the associated completion port of an alpc port but it is already set."),
    SECTION_NOT_IMAGE = (0xC0000049, "an attempt was made to query image information on a section that does not map an image."),
    SUSPEND_COUNT_EXCEEDED = (0xC000004A, "an attempt was made to suspend a thread whose suspend count was at its maximum."),
    THREAD_IS_TERMINATING = (0xC000004B, "an attempt was made to suspend a thread that has begun termination."),
    BAD_WORKING_SET_LIMIT = (0xC000004C, "an attempt was made to set the working set limit to an invalid value (for example, the minimum greater than maximum)."),
    INCOMPATIBLE_FILE_MAP = (0xC000004D, "a section was created to map a file that is not compatible with an already existing section that maps the same file."),
    SECTION_PROTECTION = (0xC000004E, "a view to a section specifies a protection that is incompatible with the protection of the initial view."),
    EAS_NOT_SUPPORTED = (0xC000004F, "an operation involving eas failed because the file system does not support eas."),
    EA_TOO_LARGE = (0xC0000050, "an ea operation failed because the ea set is too large."),
    NONEXISTENT_EA_ENTRY = (0xC0000051, "an ea operation failed because the name or ea index is invalid."),
    NO_EAS_ON_FILE = (0xC0000052, "the file for which eas were requested has no eas."),
    EA_CORRUPT_ERROR = (0xC0000053, "the ea is corrupt and cannot be read."),
    FILE_LOCK_CONFLICT = (0xC0000054, "a requested read/write cannot be granted due to a conflicting file lock."),
    LOCK_NOT_GRANTED = (0xC0000055, "a requested file lock cannot be granted due to other existing locks."),
    DELETE_PENDING = (0xC0000056, "a non-close operation has been requested of a file object that has a delete pending."),
    CTL_FILE_NOT_SUPPORTED = (0xC0000057, "an attempt was made to set the control attribute on a file. this attribute is not supported in the destination file system."),
    UNKNOWN_REVISION = (0xC0000058, "indicates a revision number that was encountered or specified is not one that is known by the service. it may be a more recent revision than the service is aware of."),
    REVISION_MISMATCH = (0xC0000059, "indicates that two revision levels are incompatible."),
    INVALID_OWNER = (0xC000005A, "indicates a particular security id may not be assigned as the owner of an object."),
    INVALID_PRIMARY_GROUP = (0xC000005B, "indicates a particular security id may not be assigned as the primary group of an object."),
    NO_IMPERSONATION_TOKEN = (0xC000005C, "an attempt has been made to operate on an impersonation token by a thread that is not currently impersonating a client."),
    CANT_DISABLE_MANDATORY = (0xC000005D, "a mandatory group may not be disabled."),
    NO_LOGON_SERVERS = (0xC000005E, "no logon servers are currently available to service the logon request."),
    NO_SUCH_LOGON_SESSION = (0xC000005F, "a specified logon session does not exist. it may already have been terminated."),
    NO_SUCH_PRIVILEGE = (0xC0000060, "a specified privilege does not exist."),
    PRIVILEGE_NOT_HELD = (0xC0000061, "a required privilege is not held by the client."),
    INVALID_ACCOUNT_NAME = (0xC0000062, "the name provided is not a properly formed account name."),
    USER_EXISTS = (0xC0000063, "the specified account already exists."),
    NO_SUCH_USER = (0xC0000064, "the specified account does not exist."),
    GROUP_EXISTS = (0xC0000065, "the specified group already exists."),
    NO_SUCH_GROUP = (0xC0000066, "the specified group does not exist."),
    MEMBER_IN_GROUP = (0xC0000067, "the specified user account is already in the specified group account. also used to indicate a group cannot be deleted because it contains a member."),
    MEMBER_NOT_IN_GROUP = (0xC0000068, "the specified user account is not a member of the specified group account."),
    LAST_ADMIN = (0xC0000069, "indicates the requested operation would disable or delete the last remaining administration account. this is not allowed to prevent creating a situation in which the system cannot be administrated."),
    WRONG_PASSWORD = (0xC000006A, "when trying to update a password, this return status indicates that the value provided as the current password is not correct."),
    ILL_FORMED_PASSWORD = (0xC000006B, "when trying to update a password, this return status indicates that the value provided for the new password contains values that are not allowed in passwords."),
    PASSWORD_RESTRICTION = (0xC000006C, "when trying to update a password, this status indicates that some password update rule has been violated. for example, the password may not meet length criteria."),
    LOGON_FAILURE = (0xC000006D, "the attempted logon is invalid. this is either due to a bad username or authentication information."),
    ACCOUNT_RESTRICTION = (0xC000006E, "indicates a referenced user name and authentication information are valid, but some user account restriction has prevented successful authentication (such as time-of-day restrictions)."),
    INVALID_LOGON_HOURS = (0xC000006F, "the user account has time restrictions and may not be logged onto at this time."),
    INVALID_WORKSTATION = (0xC0000070, "the user account is restricted so that it may not be used to log on from the source workstation."),
    PASSWORD_EXPIRED = (0xC0000071, "the user account password has expired."),
    ACCOUNT_DISABLED = (0xC0000072, "the referenced account is currently disabled and may not be logged on to."),
    NONE_MAPPED = (0xC0000073, "none of the information to be translated has been translated."),
    TOO_MANY_LUIDS_REQUESTED = (0xC0000074, "the number of luids requested may not be allocated with a single allocation."),
    LUIDS_EXHAUSTED = (0xC0000075, "indicates there are no more luids to allocate."),
    INVALID_SUB_AUTHORITY = (0xC0000076, "indicates the sub-authority value is invalid for the particular use."),
    INVALID_ACL = (0xC0000077, "indicates the acl structure is not valid."),
    INVALID_SID = (0xC0000078, "indicates the sid structure is not valid."),
    INVALID_SECURITY_DESCR = (0xC0000079, "indicates the security_descriptor structure is not valid."),
    PROCEDURE_NOT_FOUND = (0xC000007A, "indicates the specified procedure address cannot be found in the dll."),
    INVALID_IMAGE_FORMAT = (0xC000007B, "{bad image} %hs is either not designed to run on windows or it contains an error. try installing the program again using the original installation media or contact your system administrator or the software vendor for support."),
    NO_TOKEN = (0xC000007C, "an attempt was made to reference a token that does not exist. this is typically done by referencing the token that is associated with a thread when the thread is not impersonating a client."),
    BAD_INHERITANCE_ACL = (0xC000007D, "indicates that an attempt to build either an inherited acl or ace was not successful. this can be caused by a number of things. one of the more probable causes is the replacement of a creatorid with a sid that did not fit into the ace or acl."),
    RANGE_NOT_LOCKED = (0xC000007E, "the range specified in ntunlockfile was not locked."),
    DISK_FULL = (0xC000007F, "an operation failed because the disk was full."),
    SERVER_DISABLED = (0xC0000080, "the guid allocation server is disabled at the moment."),
    SERVER_NOT_DISABLED = (0xC0000081, "the guid allocation server is enabled at the moment."),
    TOO_MANY_GUIDS_REQUESTED = (0xC0000082, "too many guids were requested from the allocation server at once."),
    GUIDS_EXHAUSTED = (0xC0000083, "the guids could not be allocated because the authority agent was exhausted."),
    INVALID_ID_AUTHORITY = (0xC0000084, "the value provided was an invalid value for an identifier authority."),
    AGENTS_EXHAUSTED = (0xC0000085, "no more authority agent values are available for the particular identifier authority value."),
    INVALID_VOLUME_LABEL = (0xC0000086, "an invalid volume label has been specified."),
    SECTION_NOT_EXTENDED = (0xC0000087, "a mapped section could not be extended."),
    NOT_MAPPED_DATA = (0xC0000088, "specified section to flush does not map a data file."),
    RESOURCE_DATA_NOT_FOUND = (0xC0000089, "indicates the specified image file did not contain a resource section."),
    RESOURCE_TYPE_NOT_FOUND = (0xC000008A, "indicates the specified resource type cannot be found in the image file."),
    RESOURCE_NAME_NOT_FOUND = (0xC000008B, "indicates the specified resource name cannot be found in the image file."),
    ARRAY_BOUNDS_EXCEEDED = (0xC000008C, "{exception} array bounds exceeded."),
    FLOAT_DENORMAL_OPERAND = (0xC000008D, "{exception} floating-point denormal operand."),
    FLOAT_DIVIDE_BY_ZERO = (0xC000008E, "{exception} floating-point division by zero."),
    FLOAT_INEXACT_RESULT = (0xC000008F, "{exception} floating-point inexact result."),
    FLOAT_INVALID_OPERATION = (0xC0000090, "{exception} floating-point invalid operation."),
    FLOAT_OVERFLOW = (0xC0000091, "{exception} floating-point overflow."),
    FLOAT_STACK_CHECK = (0xC0000092, "{exception} floating-point stack check."),
    FLOAT_UNDERFLOW = (0xC0000093, "{exception} floating-point underflow."),
    INTEGER_DIVIDE_BY_ZERO = (0xC0000094, "{exception} integer division by zero."),
    INTEGER_OVERFLOW = (0xC0000095, "{exception} integer overflow."),
    PRIVILEGED_INSTRUCTION = (0xC0000096, "{exception} privileged instruction."),
    TOO_MANY_PAGING_FILES = (0xC0000097, "an attempt was made to install more paging files than the system supports."),
    FILE_INVALID = (0xC0000098, "the volume for a file has been externally altered such that the opened file is no longer valid."),
    ALLOTTED_SPACE_EXCEEDED = (0xC0000099, "when a block of memory is allotted for future updates, such as the memory allocated to hold discretionary access control and primary group information, successive updates may exceed the amount of memory originally allotted. because a quota may already have been charged to several processes that have handles to the object, it is not reasonable to alter the size of the allocated memory. instead, a request that requires more memory than has been allotted must fail and the status_allotted_space_exceeded error returned."),
    INSUFFICIENT_RESOURCES = (0xC000009A, "insufficient system resources exist to complete the api."),
    DFS_EXIT_PATH_FOUND = (0xC000009B, "an attempt has been made to open a dfs exit path control file."),
    DEVICE_DATA_ERROR = (0xC000009C, "there are bad blocks (sectors) on the hard disk."),
    DEVICE_NOT_CONNECTED = (0xC000009D, "there is bad cabling, non-termination, or the controller is not able to obtain access to the hard disk."),
    FREE_VM_NOT_AT_BASE = (0xC000009F, "virtual memory cannot be freed because the base address is not the base of the region and a region size of zero was specified."),
    MEMORY_NOT_ALLOCATED = (0xC00000A0, "an attempt was made to free virtual memory that is not allocated."),
    WORKING_SET_QUOTA = (0xC00000A1, "the working set is not big enough to allow the requested pages to be locked."),
    MEDIA_WRITE_PROTECTED = (0xC00000A2, "{write protect error} the disk cannot be written to because it is write-protected. remove the write protection from the volume %hs in drive %hs."),
    DEVICE_NOT_READY = (0xC00000A3, "{drive not ready} the drive is not ready for use; its door may be open. check drive %hs and make sure that a disk is inserted and that the drive door is closed."),
    INVALID_GROUP_ATTRIBUTES = (0xC00000A4, "the specified attributes are invalid or are incompatible with the attributes for the group as a whole."),
    BAD_IMPERSONATION_LEVEL = (0xC00000A5, "a specified impersonation level is invalid. also used to indicate that a required impersonation level was not provided."),
    CANT_OPEN_ANONYMOUS = (0xC00000A6, "an attempt was made to open an anonymous-level token. anonymous tokens may not be opened."),
    BAD_VALIDATION_CLASS = (0xC00000A7, "the validation information class requested was invalid."),
    BAD_TOKEN_TYPE = (0xC00000A8, "the type of a token object is inappropriate for its attempted use."),
    BAD_MASTER_BOOT_RECORD = (0xC00000A9, "the type of a token object is inappropriate for its attempted use."),
    INSTRUCTION_MISALIGNMENT = (0xC00000AA, "an attempt was made to execute an instruction at an unaligned address and the host system does not support unaligned instruction references."),
    INSTANCE_NOT_AVAILABLE = (0xC00000AB, "the maximum named pipe instance count has been reached."),
    PIPE_NOT_AVAILABLE = (0xC00000AC, "an instance of a named pipe cannot be found in the listening state."),
    INVALID_PIPE_STATE = (0xC00000AD, "the named pipe is not in the connected or closing state."),
    PIPE_BUSY = (0xC00000AE, "the specified pipe is set to complete operations and there are current i/o operations queued so that it cannot be changed to queue operations."),
    ILLEGAL_FUNCTION = (0xC00000AF, "the specified handle is not open to the server end of the named pipe."),
    PIPE_DISCONNECTED = (0xC00000B0, "the specified named pipe is in the disconnected state."),
    PIPE_CLOSING = (0xC00000B1, "the specified named pipe is in the closing state."),
    PIPE_CONNECTED = (0xC00000B2, "the specified named pipe is in the connected state."),
    PIPE_LISTENING = (0xC00000B3, "the specified named pipe is in the listening state."),
    INVALID_READ_MODE = (0xC00000B4, "the specified named pipe is not in message mode."),
    IO_TIMEOUT = (0xC00000B5, "{device timeout} the specified i/o operation on %hs was not completed before the time-out period expired."),
    FILE_FORCED_CLOSED = (0xC00000B6, "the specified file has been closed by another process."),
    PROFILING_NOT_STARTED = (0xC00000B7, "profiling is not started."),
    PROFILING_NOT_STOPPED = (0xC00000B8, "profiling is not stopped."),
    COULD_NOT_INTERPRET = (0xC00000B9, "the passed acl did not contain the minimum required information."),
    FILE_IS_A_DIRECTORY = (0xC00000BA, "the file that was specified as a target is a directory, and the caller specified that it could be anything but a directory."),
    NOT_SUPPORTED = (0xC00000BB, "the request is not supported."),
    REMOTE_NOT_LISTENING = (0xC00000BC, "this remote computer is not listening."),
    DUPLICATE_NAME = (0xC00000BD, "a duplicate name exists on the network."),
    BAD_NETWORK_PATH = (0xC00000BE, "the network path cannot be located."),
    NETWORK_BUSY = (0xC00000BF, "the network is busy."),
    DEVICE_DOES_NOT_EXIST = (0xC00000C0, "this device does not exist."),
    TOO_MANY_COMMANDS = (0xC00000C1, "the network bios command limit has been reached."),
    ADAPTER_HARDWARE_ERROR = (0xC00000C2, "an i/o adapter hardware error has occurred."),
    INVALID_NETWORK_RESPONSE = (0xC00000C3, "the network responded incorrectly."),
    UNEXPECTED_NETWORK_ERROR = (0xC00000C4, "an unexpected network error occurred."),
    BAD_REMOTE_ADAPTER = (0xC00000C5, "the remote adapter is not compatible."),
    PRINT_QUEUE_FULL = (0xC00000C6, "the print queue is full."),
    NO_SPOOL_SPACE = (0xC00000C7, "space to store the file that is waiting to be printed is not available on the server."),
    PRINT_CANCELLED = (0xC00000C8, "the requested print file has been canceled."),
    NETWORK_NAME_DELETED = (0xC00000C9, "the network name was deleted."),
    NETWORK_ACCESS_DENIED = (0xC00000CA, "network access is denied."),
    BAD_DEVICE_TYPE = (0xC00000CB, "{incorrect network resource type} the specified device type (lpt, for example) conflicts with the actual device type on the remote resource."),
    BAD_NETWORK_NAME = (0xC00000CC, "{network name not found} the specified share name cannot be found on the remote server."),
    TOO_MANY_NAMES = (0xC00000CD, "the name limit for the network adapter card of the local computer was exceeded."),
    TOO_MANY_SESSIONS = (0xC00000CE, "the network bios session limit was exceeded."),
    SHARING_PAUSED = (0xC00000CF, "file sharing has been temporarily paused."),
    REQUEST_NOT_ACCEPTED = (0xC00000D0, "no more connections can be made to this remote computer at this time because the computer has already accepted the maximum number of connections."),
    REDIRECTOR_PAUSED = (0xC00000D1, "print or disk redirection is temporarily paused."),
    NET_WRITE_FAULT = (0xC00000D2, "a network data fault occurred."),
    PROFILING_AT_LIMIT = (0xC00000D3, "the number of active profiling objects is at the maximum and no more may be started."),
    NOT_SAME_DEVICE = (0xC00000D4, "{incorrect volume} the destination file of a rename request is located on a different device than the source of the rename request."),
    FILE_RENAMED = (0xC00000D5, "the specified file has been renamed and thus cannot be modified."),
    VIRTUAL_CIRCUIT_CLOSED = (0xC00000D6, "{network request timeout} the session with a remote server has been disconnected because the time-out interval for a request has expired."),
    NO_SECURITY_ON_OBJECT = (0xC00000D7, "indicates an attempt was made to operate on the security of an object that does not have security associated with it."),
    CANT_WAIT = (0xC00000D8, "used to indicate that an operation cannot continue without blocking for i/o."),
    PIPE_EMPTY = (0xC00000D9, "used to indicate that a read operation was done on an empty pipe."),
    CANT_ACCESS_DOMAIN_INFO = (0xC00000DA, "configuration information could not be read from the domain controller, either because the machine is unavailable or access has been denied."),
    CANT_TERMINATE_SELF = (0xC00000DB, "indicates that a thread attempted to terminate itself by default (called ntterminatethread with null) and it was the last thread in the current process."),
    INVALID_SERVER_STATE = (0xC00000DC, "indicates the sam server was in the wrong state to perform the desired operation."),
    INVALID_DOMAIN_STATE = (0xC00000DD, "indicates the domain was in the wrong state to perform the desired operation."),
    INVALID_DOMAIN_ROLE = (0xC00000DE, "this operation is only allowed for the primary domain controller of the domain."),
    NO_SUCH_DOMAIN = (0xC00000DF, "the specified domain did not exist."),
    DOMAIN_EXISTS = (0xC00000E0, "the specified domain already exists."),
    DOMAIN_LIMIT_EXCEEDED = (0xC00000E1, "an attempt was made to exceed the limit on the number of domains per server for this release."),
    OPLOCK_NOT_GRANTED = (0xC00000E2, "an error status returned when the opportunistic lock (oplock) request is denied."),
    INVALID_OPLOCK_PROTOCOL = (0xC00000E3, "an error status returned when an invalid opportunistic lock (oplock) acknowledgment is received by a file system."),
    INTERNAL_DB_CORRUPTION = (0xC00000E4, "this error indicates that the requested operation cannot be completed due to a catastrophic media failure or an on-disk data structure corruption."),
    INTERNAL_ERROR = (0xC00000E5, "an internal error occurred."),
    GENERIC_NOT_MAPPED = (0xC00000E6, "indicates generic access types were contained in an access mask which should already be mapped to non-generic access types."),
    BAD_DESCRIPTOR_FORMAT = (0xC00000E7, "indicates a security descriptor is not in the necessary format (absolute or self-relative)."),
    INVALID_USER_BUFFER = (0xC00000E8, "an access to a user buffer failed at an expected point in time. this code is defined because the caller does not want to accept status_access_violation in its filter."),
    UNEXPECTED_IO_ERROR = (0xC00000E9, "if an i/o error that is not defined in the standard fsrtl filter is returned, it is converted to the following error, which is guaranteed to be in the filter. in this case, information is lost; however, the filter correctly handles the exception."),
    UNEXPECTED_MM_CREATE_ERR = (0xC00000EA, "if an mm error that is not defined in the standard fsrtl filter is returned, it is converted to one of the following errors, which are guaranteed to be in the filter. in this case, information is lost; however, the filter correctly handles the exception."),
    UNEXPECTED_MM_MAP_ERROR = (0xC00000EB, "if an mm error that is not defined in the standard fsrtl filter is returned, it is converted to one of the following errors, which are guaranteed to be in the filter. in this case, information is lost; however, the filter correctly handles the exception."),
    UNEXPECTED_MM_EXTEND_ERR = (0xC00000EC, "if an mm error that is not defined in the standard fsrtl filter is returned, it is converted to one of the following errors, which are guaranteed to be in the filter. in this case, information is lost; however, the filter correctly handles the exception."),
    NOT_LOGON_PROCESS = (0xC00000ED, "the requested action is restricted for use by logon processes only. the calling process has not registered as a logon process."),
    LOGON_SESSION_EXISTS = (0xC00000EE, "an attempt has been made to start a new session manager or lsa logon session by using an id that is already in use."),
    INVALID_PARAMETER_1 = (0xC00000EF, "an invalid parameter was passed to a service or function as the first argument."),
    INVALID_PARAMETER_2 = (0xC00000F0, "an invalid parameter was passed to a service or function as the second argument."),
    INVALID_PARAMETER_3 = (0xC00000F1, "an invalid parameter was passed to a service or function as the third argument."),
    INVALID_PARAMETER_4 = (0xC00000F2, "an invalid parameter was passed to a service or function as the fourth argument."),
    INVALID_PARAMETER_5 = (0xC00000F3, "an invalid parameter was passed to a service or function as the fifth argument."),
    INVALID_PARAMETER_6 = (0xC00000F4, "an invalid parameter was passed to a service or function as the sixth argument."),
    INVALID_PARAMETER_7 = (0xC00000F5, "an invalid parameter was passed to a service or function as the seventh argument."),
    INVALID_PARAMETER_8 = (0xC00000F6, "an invalid parameter was passed to a service or function as the eighth argument."),
    INVALID_PARAMETER_9 = (0xC00000F7, "an invalid parameter was passed to a service or function as the ninth argument."),
    INVALID_PARAMETER_10 = (0xC00000F8, "an invalid parameter was passed to a service or function as the tenth argument."),
    INVALID_PARAMETER_11 = (0xC00000F9, "an invalid parameter was passed to a service or function as the eleventh argument."),
    INVALID_PARAMETER_12 = (0xC00000FA, "an invalid parameter was passed to a service or function as the twelfth argument."),
    REDIRECTOR_NOT_STARTED = (0xC00000FB, "an attempt was made to access a network file, but the network software was not yet started."),
    REDIRECTOR_STARTED = (0xC00000FC, "an attempt was made to start the redirector, but the redirector has already been started."),
    STACK_OVERFLOW = (0xC00000FD, "a new guard page for the stack cannot be created."),
    NO_SUCH_PACKAGE = (0xC00000FE, "a specified authentication package is unknown."),
    BAD_FUNCTION_TABLE = (0xC00000FF, "a malformed function table was encountered during an unwind operation."),
    VARIABLE_NOT_FOUND = (0xC0000100, "indicates the specified environment variable name was not found in the specified environment block."),
    DIRECTORY_NOT_EMPTY = (0xC0000101, "indicates that the directory trying to be deleted is not empty."),
    FILE_CORRUPT_ERROR = (0xC0000102, "{corrupt file} the file or directory %hs is corrupt and unreadable. run the chkdsk utility."),
    NOT_A_DIRECTORY = (0xC0000103, "a requested opened file is not a directory."),
    BAD_LOGON_SESSION_STATE = (0xC0000104, "the logon session is not in a state that is consistent with the requested operation."),
    LOGON_SESSION_COLLISION = (0xC0000105, "an internal lsa error has occurred. an authentication package has requested the creation of a logon session but the id of an already existing logon session has been specified."),
    NAME_TOO_LONG = (0xC0000106, "a specified name string is too long for its intended use."),
    FILES_OPEN = (0xC0000107, "the user attempted to force close the files on a redirected drive, but there were opened files on the drive, and the user did not specify a sufficient level of force."),
    CONNECTION_IN_USE = (0xC0000108, "the user attempted to force close the files on a redirected drive, but there were opened directories on the drive, and the user did not specify a sufficient level of force."),
    MESSAGE_NOT_FOUND = (0xC0000109, "rtlfindmessage could not locate the requested message id in the message table resource."),
    PROCESS_IS_TERMINATING = (0xC000010A, "an attempt was made to duplicate an object handle into or out of an exiting process."),
    INVALID_LOGON_TYPE = (0xC000010B, "indicates an invalid value has been provided for the logontype requested."),
    NO_GUID_TRANSLATION = (0xC000010C, "indicates that an attempt was made to assign protection to a file system file or directory and one of the sids in the security descriptor could not be translated into a guid that could be stored by the file system. this causes the protection attempt to fail, which may cause a file creation attempt to fail."),
    CANNOT_IMPERSONATE = (0xC000010D, "indicates that an attempt has been made to impersonate via a named pipe that has not yet been read from."),
    IMAGE_ALREADY_LOADED = (0xC000010E, "indicates that the specified image is already loaded."),
    NO_LDT = (0xC0000117, "indicates that an attempt was made to change the size of the ldt for a process that has no ldt."),
    INVALID_LDT_SIZE = (0xC0000118, "indicates that an attempt was made to grow an ldt by setting its size, or that the size was not an even number of selectors."),
    INVALID_LDT_OFFSET = (0xC0000119, "indicates that the starting value for the ldt information was not an integral multiple of the selector size."),
    INVALID_LDT_DESCRIPTOR = (0xC000011A, "indicates that the user supplied an invalid descriptor when trying to set up ldt descriptors."),
    INVALID_IMAGE_NE_FORMAT = (0xC000011B, "the specified image file did not have the correct format. it appears to be ne format."),
    RXACT_INVALID_STATE = (0xC000011C, "indicates that the transaction state of a registry subtree is incompatible with the requested operation. for example, a request has been made to start a new transaction with one already in progress, or a request has been made to apply a transaction when one is not currently in progress."),
    RXACT_COMMIT_FAILURE = (0xC000011D, "indicates an error has occurred during a registry transaction commit. the database has been left in an unknown, but probably inconsistent, state. the state of the registry transaction is left as committing."),
    MAPPED_FILE_SIZE_ZERO = (0xC000011E, "an attempt was made to map a file of size zero with the maximum size specified as zero."),
    TOO_MANY_OPENED_FILES = (0xC000011F, "too many files are opened on a remote server. this error should only be returned by the windows redirector on a remote drive."),
    CANCELLED = (0xC0000120, "the i/o request was canceled."),
    CANNOT_DELETE = (0xC0000121, "an attempt has been made to remove a file or directory that cannot be deleted."),
    INVALID_COMPUTER_NAME = (0xC0000122, "indicates a name that was specified as a remote computer name is syntactically invalid."),
    FILE_DELETED = (0xC0000123, "an i/o request other than close was performed on a file after it was deleted, which can only happen to a request that did not complete before the last handle was closed via ntclose."),
    SPECIAL_ACCOUNT = (0xC0000124, "indicates an operation that is incompatible with built-in accounts has been attempted on a built-in (special) sam account. for example, built-in accounts cannot be deleted."),
    SPECIAL_GROUP = (0xC0000125, "the operation requested may not be performed on the specified group because it is a built-in special group."),
    SPECIAL_USER = (0xC0000126, "the operation requested may not be performed on the specified user because it is a built-in special user."),
    MEMBERS_PRIMARY_GROUP = (0xC0000127, "indicates a member cannot be removed from a group because the group is currently the member's primary group."),
    FILE_CLOSED = (0xC0000128, "an i/o request other than close and several other special case operations was attempted using a file object that had already been closed."),
    TOO_MANY_THREADS = (0xC0000129, "indicates a process has too many threads to perform the requested action. for example, assignment of a primary token may only be performed when a process has zero or one threads."),
    THREAD_NOT_IN_PROCESS = (0xC000012A, "an attempt was made to operate on a thread within a specific process, but the specified thread is not in the specified process."),
    TOKEN_ALREADY_IN_USE = (0xC000012B, "an attempt was made to establish a token for use as a primary token but the token is already in use. a token can only be the primary token of one process at a time."),
    PAGEFILE_QUOTA_EXCEEDED = (0xC000012C, "the page file quota was exceeded."),
    COMMITMENT_LIMIT = (0xC000012D, "{out of virtual memory} your system is low on virtual memory. to ensure that windows runs correctly, increase the size of your virtual memory paging file. for more information, see help."),
    INVALID_IMAGE_LE_FORMAT = (0xC000012E, "the specified image file did not have the correct format: it appears to be le format."),
    INVALID_IMAGE_NOT_MZ = (0xC000012F, "the specified image file did not have the correct format: it did not have an initial mz."),
    INVALID_IMAGE_PROTECT = (0xC0000130, "the specified image file did not have the correct format: it did not have a proper e_lfarlc in the mz header."),
    INVALID_IMAGE_WIN_16 = (0xC0000131, "the specified image file did not have the correct format: it appears to be a 16-bit windows image."),
    LOGON_SERVER_CONFLICT = (0xC0000132, "the netlogon service cannot start because another netlogon service running in the domain conflicts with the specified role."),
    TIME_DIFFERENCE_AT_DC = (0xC0000133, "the time at the primary domain controller is different from the time at the backup domain controller or member server by too large an amount."),
    SYNCHRONIZATION_REQUIRED = (0xC0000134, "the sam database on a windows server is significantly out of synchronization with the copy on the domain controller. a complete synchronization is required."),
    DLL_NOT_FOUND = (0xC0000135, "{unable to locate component} this application has failed to start because %hs was not found. reinstalling the application may fix this problem."),
    OPEN_FAILED = (0xC0000136, "the ntcreatefile api failed. this error should never be returned to an application; it is a place holder for the windows lan manager redirector to use in its internal error-mapping routines."),
    IO_PRIVILEGE_FAILED = (0xC0000137, "{privilege failed} the i/o permissions for the process could not be changed."),
    ORDINAL_NOT_FOUND = (0xC0000138, "{ordinal not found} the ordinal %ld could not be located in the dynamic link library %hs."),
    ENTRYPOINT_NOT_FOUND = (0xC0000139, "{entry point not found} the procedure entry point %hs could not be located in the dynamic link library %hs."),
    CONTROL_C_EXIT = (0xC000013A, "{application exit by ctrl+c} the application terminated as a result of a ctrl+c."),
    LOCAL_DISCONNECT = (0xC000013B, "{virtual circuit closed} the network transport on your computer has closed a network connection. there may or may not be i/o requests outstanding."),
    REMOTE_DISCONNECT = (0xC000013C, "{virtual circuit closed} the network transport on a remote computer has closed a network connection. there may or may not be i/o requests outstanding."),
    REMOTE_RESOURCES = (0xC000013D, "{insufficient resources on remote computer} the remote computer has insufficient resources to complete the network request. for example, the remote computer may not have enough available memory to carry out the request at this time."),
    LINK_FAILED = (0xC000013E, "{virtual circuit closed} an existing connection (virtual circuit) has been broken at the remote computer. there is probably something wrong with the network software protocol or the network hardware on the remote computer."),
    LINK_TIMEOUT = (0xC000013F, "{virtual circuit closed} the network transport on your computer has closed a network connection because it had to wait too long for a response from the remote computer."),
    INVALID_CONNECTION = (0xC0000140, "the connection handle that was given to the transport was invalid."),
    INVALID_ADDRESS = (0xC0000141, "the address handle that was given to the transport was invalid."),
    DLL_INIT_FAILED = (0xC0000142, "{dll initialization failed} initialization of the dynamic link library %hs failed. the process is terminating abnormally."),
    MISSING_SYSTEMFILE = (0xC0000143, "{missing system file} the required system file %hs is bad or missing."),
    UNHANDLED_EXCEPTION = (0xC0000144, "{application error} the exception %s (0x%08lx) occurred in the application at location 0x%08lx."),
    APP_INIT_FAILURE = (0xC0000145, "{application error} the application failed to initialize properly (0x%lx). click ok to terminate the application."),
    PAGEFILE_CREATE_FAILED = (0xC0000146, "{unable to create paging file} the creation of the paging file %hs failed (%lx). the requested size was %ld."),
    NO_PAGEFILE = (0xC0000147, "{no paging file specified} no paging file was specified in the system configuration."),
    INVALID_LEVEL = (0xC0000148, "{incorrect system call level} an invalid level was passed into the specified system call."),
    WRONG_PASSWORD_CORE = (0xC0000149, "{incorrect password to lan manager server} you specified an incorrect password to a lan manager 2.x or ms-net server."),
    ILLEGAL_FLOAT_CONTEXT = (0xC000014A, "{exception} a real-mode application issued a floating-point instruction and floating-point hardware is not present."),
    PIPE_BROKEN = (0xC000014B, "the pipe operation has failed because the other end of the pipe has been closed."),
    REGISTRY_CORRUPT = (0xC000014C, "{the registry is corrupt} the structure of one of the files that contains registry data is corrupt; the image of the file in memory is corrupt; or the file could not be recovered because the alternate copy or log was absent or corrupt."),
    REGISTRY_IO_FAILED = (0xC000014D, "an i/o operation initiated by the registry failed and cannot be recovered. the registry could not read in, write out, or flush one of the files that contain the system's image of the registry."),
    NO_EVENT_PAIR = (0xC000014E, "an event pair synchronization operation was performed using the thread-specific client/server event pair object, but no event pair object was associated with the thread."),
    UNRECOGNIZED_VOLUME = (0xC000014F, "the volume does not contain a recognized file system. be sure that all required file system drivers are loaded and that the volume is not corrupt."),
    SERIAL_NO_DEVICE_INITED = (0xC0000150, "no serial device was successfully initialized. the serial driver will unload."),
    NO_SUCH_ALIAS = (0xC0000151, "the specified local group does not exist."),
    MEMBER_NOT_IN_ALIAS = (0xC0000152, "the specified account name is not a member of the group."),
    MEMBER_IN_ALIAS = (0xC0000153, "the specified account name is already a member of the group."),
    ALIAS_EXISTS = (0xC0000154, "the specified local group already exists."),
    LOGON_NOT_GRANTED = (0xC0000155, "a requested type of logon (for example, interactive, network, and service) is not granted by the local security policy of the target system. ask the system administrator to grant the necessary form of logon."),
    TOO_MANY_SECRETS = (0xC0000156, "the maximum number of secrets that may be stored in a single system was exceeded. the length and number of secrets is limited to satisfy u.s. state department export restrictions."),
    SECRET_TOO_LONG = (0xC0000157, "the length of a secret exceeds the maximum allowable length. the length and number of secrets is limited to satisfy u.s. state department export restrictions."),
    INTERNAL_DB_ERROR = (0xC0000158, "the local security authority (lsa) database contains an internal inconsistency."),
    FULLSCREEN_MODE = (0xC0000159, "the requested operation cannot be performed in full-screen mode."),
    TOO_MANY_CONTEXT_IDS = (0xC000015A, "during a logon attempt, the user's security context accumulated too many security ids. this is a very unusual situation. remove the user from some global or local groups to reduce the number of security ids to incorporate into the security context."),
    LOGON_TYPE_NOT_GRANTED = (0xC000015B, "a user has requested a type of logon (for example, interactive or network) that has not been granted. an administrator has control over who may logon interactively and through the network."),
    NOT_REGISTRY_FILE = (0xC000015C, "the system has attempted to load or restore a file into the registry, and the specified file is not in the format of a registry file."),
    NT_CROSS_ENCRYPTION_REQUIRED = (0xC000015D, "an attempt was made to change a user password in the security account manager without providing the necessary windows cross-encrypted password."),
    DOMAIN_CTRLR_CONFIG_ERROR = (0xC000015E, "a domain server has an incorrect configuration."),
    FT_MISSING_MEMBER = (0xC000015F, "an attempt was made to explicitly access the secondary copy of information via a device control to the fault tolerance driver and the secondary copy is not present in the system."),
    ILL_FORMED_SERVICE_ENTRY = (0xC0000160, "a configuration registry node that represents a driver service entry was ill-formed and did not contain the required value entries."),
    ILLEGAL_CHARACTER = (0xC0000161, "an illegal character was encountered. for a multibyte character set, this includes a lead byte without a succeeding trail byte. for the unicode character set this includes the characters 0xffff and 0xfffe."),
    UNMAPPABLE_CHARACTER = (0xC0000162, "no mapping for the unicode character exists in the target multibyte code page."),
    UNDEFINED_CHARACTER = (0xC0000163, "the unicode character is not defined in the unicode character set that is installed on the system."),
    FLOPPY_VOLUME = (0xC0000164, "the paging file cannot be created on a floppy disk."),
    FLOPPY_ID_MARK_NOT_FOUND = (0xC0000165, "{floppy disk error} while accessing a floppy disk, an id address mark was not found."),
    FLOPPY_WRONG_CYLINDER = (0xC0000166, "{floppy disk error} while accessing a floppy disk, the track address from the sector id field was found to be different from the track address that is maintained by the controller."),
    FLOPPY_UNKNOWN_ERROR = (0xC0000167, "{floppy disk error} the floppy disk controller reported an error that is not recognized by the floppy disk driver."),
    FLOPPY_BAD_REGISTERS = (0xC0000168, "{floppy disk error} while accessing a floppy-disk, the controller returned inconsistent results via its registers."),
    DISK_RECALIBRATE_FAILED = (0xC0000169, "{hard disk error} while accessing the hard disk, a recalibrate operation failed, even after retries."),
    DISK_OPERATION_FAILED = (0xC000016A, "{hard disk error} while accessing the hard disk, a disk operation failed even after retries."),
    DISK_RESET_FAILED = (0xC000016B, "{hard disk error} while accessing the hard disk, a disk controller reset was needed, but even that failed."),
    SHARED_IRQ_BUSY = (0xC000016C, "an attempt was made to open a device that was sharing an interrupt request (irq) with other devices. at least one other device that uses that irq was already opened. two concurrent opens of devices that share an irq and only work via interrupts is not supported for the particular bus type that the devices use."),
    FT_ORPHANING = (0xC000016D, "{ft orphaning} a disk that is part of a fault-tolerant volume can no longer be accessed."),
    BIOS_FAILED_TO_CONNECT_INTERRUPT = (0xC000016E, "the basic input/output system (bios) failed to connect a system interrupt to the device or bus for which the device is connected."),
    PARTITION_FAILURE = (0xC0000172, "the tape could not be partitioned."),
    INVALID_BLOCK_LENGTH = (0xC0000173, "when accessing a new tape of a multi-volume partition, the current blocksize is incorrect."),
    DEVICE_NOT_PARTITIONED = (0xC0000174, "the tape partition information could not be found when loading a tape."),
    UNABLE_TO_LOCK_MEDIA = (0xC0000175, "an attempt to lock the eject media mechanism failed."),
    UNABLE_TO_UNLOAD_MEDIA = (0xC0000176, "an attempt to unload media failed."),
    EOM_OVERFLOW = (0xC0000177, "the physical end of tape was detected."),
    NO_MEDIA = (0xC0000178, "{no media} there is no media in the drive. insert media into drive %hs."),
    NO_SUCH_MEMBER = (0xC000017A, "a member could not be added to or removed from the local group because the member does not exist."),
    INVALID_MEMBER = (0xC000017B, "a new member could not be added to a local group because the member has the wrong account type."),
    KEY_DELETED = (0xC000017C, "an illegal operation was attempted on a registry key that has been marked for deletion."),
    NO_LOG_SPACE = (0xC000017D, "the system could not allocate the required space in a registry log."),
    TOO_MANY_SIDS = (0xC000017E, "too many sids have been specified."),
    LM_CROSS_ENCRYPTION_REQUIRED = (0xC000017F, "an attempt was made to change a user password in the security account manager without providing the necessary lm cross-encrypted password."),
    KEY_HAS_CHILDREN = (0xC0000180, "an attempt was made to create a symbolic link in a registry key that already has subkeys or values."),
    CHILD_MUST_BE_VOLATILE = (0xC0000181, "an attempt was made to create a stable subkey under a volatile parent key."),
    DEVICE_CONFIGURATION_ERROR = (0xC0000182, "the i/o device is configured incorrectly or the configuration parameters to the driver are incorrect."),
    DRIVER_INTERNAL_ERROR = (0xC0000183, "an error was detected between two drivers or within an i/o driver."),
    INVALID_DEVICE_STATE = (0xC0000184, "the device is not in a valid state to perform this request."),
    IO_DEVICE_ERROR = (0xC0000185, "the i/o device reported an i/o error."),
    DEVICE_PROTOCOL_ERROR = (0xC0000186, "a protocol error was detected between the driver and the device."),
    BACKUP_CONTROLLER = (0xC0000187, "this operation is only allowed for the primary domain controller of the domain."),
    LOG_FILE_FULL = (0xC0000188, "the log file space is insufficient to support this operation."),
    TOO_LATE = (0xC0000189, "a write operation was attempted to a volume after it was dismounted."),
    NO_TRUST_LSA_SECRET = (0xC000018A, "the workstation does not have a trust secret for the primary domain in the local lsa database."),
    NO_TRUST_SAM_ACCOUNT = (0xC000018B, "on applicable windows server releases, the sam database does not have a computer account for this workstation trust relationship."),
    TRUSTED_DOMAIN_FAILURE = (0xC000018C, "the logon request failed because the trust relationship between the primary domain and the trusted domain failed."),
    TRUSTED_RELATIONSHIP_FAILURE = (0xC000018D, "the logon request failed because the trust relationship between this workstation and the primary domain failed."),
    EVENTLOG_FILE_CORRUPT = (0xC000018E, "the eventlog log file is corrupt."),
    EVENTLOG_CANT_START = (0xC000018F, "no eventlog log file could be opened. the eventlog service did not start."),
    TRUST_FAILURE = (0xC0000190, "the network logon failed. this may be because the validation authority cannot be reached."),
    MUTANT_LIMIT_EXCEEDED = (0xC0000191, "an attempt was made to acquire a mutant such that its maximum count would have been exceeded."),
    NETLOGON_NOT_STARTED = (0xC0000192, "an attempt was made to logon, but the netlogon service was not started."),
    ACCOUNT_EXPIRED = (0xC0000193, "the user account has expired."),
    POSSIBLE_DEADLOCK = (0xC0000194, "{exception} possible deadlock condition."),
    NETWORK_CREDENTIAL_CONFLICT = (0xC0000195, "multiple connections to a server or shared resource by the same user, using more than one user name, are not allowed. disconnect all previous connections to the server or shared resource and try again."),
    REMOTE_SESSION_LIMIT = (0xC0000196, "an attempt was made to establish a session to a network server, but there are already too many sessions established to that server."),
    EVENTLOG_FILE_CHANGED = (0xC0000197, "the log file has changed between reads."),
    NOLOGON_INTERDOMAIN_TRUST_ACCOUNT = (0xC0000198, "the account used is an interdomain trust account. use your global user account or local user account to access this server."),
    NOLOGON_WORKSTATION_TRUST_ACCOUNT = (0xC0000199, "the account used is a computer account. use your global user account or local user account to access this server."),
    NOLOGON_SERVER_TRUST_ACCOUNT = (0xC000019A, "the account used is a server trust account. use your global user account or local user account to access this server."),
    DOMAIN_TRUST_INCONSISTENT = (0xC000019B, "the name or sid of the specified domain is inconsistent with the trust information for that domain."),
    FS_DRIVER_REQUIRED = (0xC000019C, "a volume has been accessed for which a file system driver is required that has not yet been loaded."),
    IMAGE_ALREADY_LOADED_AS_DLL = (0xC000019D, "indicates that the specified image is already loaded as a dll."),
    INCOMPATIBLE_WITH_GLOBAL_SHORT_NAME_REGISTRY_SETTING = (0xC000019E, "short name settings may not be changed on this volume due to the global registry setting."),
    SHORT_NAMES_NOT_ENABLED_ON_VOLUME = (0xC000019F, "short names are not enabled on this volume."),
    SECURITY_STREAM_IS_INCONSISTENT = (0xC00001A0, "the security stream for the given volume is in an inconsistent state. please run chkdsk on the volume."),
    INVALID_LOCK_RANGE = (0xC00001A1, "a requested file lock operation cannot be processed due to an invalid byte range."),
    INVALID_ACE_CONDITION = (0xC00001A2, "the specified access control entry (ace) contains an invalid condition."),
    IMAGE_SUBSYSTEM_NOT_PRESENT = (0xC00001A3, "the subsystem needed to support the image type is not present."),
    NOTIFICATION_GUID_ALREADY_DEFINED = (0xC00001A4, "the specified file already has a notification guid associated with it."),
    NETWORK_OPEN_RESTRICTION = (0xC0000201, "a remote open failed because the network open restrictions were not satisfied."),
    NO_USER_SESSION_KEY = (0xC0000202, "there is no user session key for the specified logon session."),
    USER_SESSION_DELETED = (0xC0000203, "the remote user session has been deleted."),
    RESOURCE_LANG_NOT_FOUND = (0xC0000204, "indicates the specified resource language id cannot be found in the image file."),
    INSUFF_SERVER_RESOURCES = (0xC0000205, "insufficient server resources exist to complete the request."),
    INVALID_BUFFER_SIZE = (0xC0000206, "the size of the buffer is invalid for the specified operation."),
    INVALID_ADDRESS_COMPONENT = (0xC0000207, "the transport rejected the specified network address as invalid."),
    INVALID_ADDRESS_WILDCARD = (0xC0000208, "the transport rejected the specified network address due to invalid use of a wildcard."),
    TOO_MANY_ADDRESSES = (0xC0000209, "the transport address could not be opened because all the available addresses are in use."),
    ADDRESS_ALREADY_EXISTS = (0xC000020A, "the transport address could not be opened because it already exists."),
    ADDRESS_CLOSED = (0xC000020B, "the transport address is now closed."),
    CONNECTION_DISCONNECTED = (0xC000020C, "the transport connection is now disconnected."),
    CONNECTION_RESET = (0xC000020D, "the transport connection has been reset."),
    TOO_MANY_NODES = (0xC000020E, "the transport cannot dynamically acquire any more nodes."),
    TRANSACTION_ABORTED = (0xC000020F, "the transport aborted a pending transaction."),
    TRANSACTION_TIMED_OUT = (0xC0000210, "the transport timed out a request that is waiting for a response."),
    TRANSACTION_NO_RELEASE = (0xC0000211, "the transport did not receive a release for a pending response."),
    TRANSACTION_NO_MATCH = (0xC0000212, "the transport did not find a transaction that matches the specific token."),
    TRANSACTION_RESPONDED = (0xC0000213, "the transport had previously responded to a transaction request."),
    TRANSACTION_INVALID_ID = (0xC0000214, "the transport does not recognize the specified transaction request id."),
    TRANSACTION_INVALID_TYPE = (0xC0000215, "the transport does not recognize the specified transaction request type."),
    NOT_SERVER_SESSION = (0xC0000216, "the transport can only process the specified request on the server side of a session."),
    NOT_CLIENT_SESSION = (0xC0000217, "the transport can only process the specified request on the client side of a session."),
    CANNOT_LOAD_REGISTRY_FILE = (0xC0000218, "{registry file failure} the registry cannot load the hive (file): %hs or its log or alternate. it is corrupt, absent, or not writable."),
    DEBUG_ATTACH_FAILED = (0xC0000219, "{unexpected failure in debugactiveprocess} an unexpected failure occurred while processing a debugactiveprocess api request. you may choose ok to terminate the process, or cancel to ignore the error."),
    SYSTEM_PROCESS_TERMINATED = (0xC000021A, "{fatal system error} the %hs system process terminated unexpectedly with a status of 0x%08x (0x%08x 0x%08x). the system has been shut down."),
    DATA_NOT_ACCEPTED = (0xC000021B, "{data not accepted} the tdi client could not handle the data received during an indication."),
    NO_BROWSER_SERVERS_FOUND = (0xC000021C, "{unable to retrieve browser server list} the list of servers for this workgroup is not currently available."),
    VDM_HARD_ERROR = (0xC000021D, "ntvdm encountered a hard error."),
    DRIVER_CANCEL_TIMEOUT = (0xC000021E, "{cancel timeout} the driver %hs failed to complete a canceled i/o request in the allotted time."),
    REPLY_MESSAGE_MISMATCH = (0xC000021F, "{reply message mismatch} an attempt was made to reply to an lpc message, but the thread specified by the client id in the message was not waiting on that message."),
    MAPPED_ALIGNMENT = (0xC0000220, "{mapped view alignment incorrect} an attempt was made to map a view of a file, but either the specified base address or the offset into the file were not aligned on the proper allocation granularity."),
    IMAGE_CHECKSUM_MISMATCH = (0xC0000221, "{bad image checksum} the image %hs is possibly corrupt. the header checksum does not match the computed checksum."),
    LOST_WRITEBEHIND_DATA = (0xC0000222, "{delayed write failed} windows was unable to save all the data for the file %hs. the data has been lost. this error may be caused by a failure of your computer hardware or network connection. try to save this file elsewhere."),
    CLIENT_SERVER_PARAMETERS_INVALID = (0xC0000223, "the parameters passed to the server in the client/server shared memory window were invalid. too much data may have been put in the shared memory window."),
    PASSWORD_MUST_CHANGE = (0xC0000224, "the user password must be changed before logging on the first time."),
    NOT_FOUND = (0xC0000225, "the object was not found."),
    NOT_TINY_STREAM = (0xC0000226, "the stream is not a tiny stream."),
    RECOVERY_FAILURE = (0xC0000227, "a transaction recovery failed."),
    STACK_OVERFLOW_READ = (0xC0000228, "the request must be handled by the stack overflow code."),
    FAIL_CHECK = (0xC0000229, "a consistency check failed."),
    DUPLICATE_OBJECTID = (0xC000022A, "the attempt to insert the id in the index failed because the id is already in the index."),
    OBJECTID_EXISTS = (0xC000022B, "the attempt to set the object id failed because the object already has an id."),
    CONVERT_TO_LARGE = (0xC000022C, "internal ofs status codes indicating how an allocation operation is handled. either it is retried after the containing onode is moved or the extent stream is converted to a large stream."),
    RETRY = (0xC000022D, "the request needs to be retried."),
    FOUND_OUT_OF_SCOPE = (0xC000022E, "the attempt to find the object found an object on the volume that matches by id; however, it is out of the scope of the handle that is used for the operation."),
    ALLOCATE_BUCKET = (0xC000022F, "the bucket array must be grown. retry the transaction after doing so."),
    PROPSET_NOT_FOUND = (0xC0000230, "the specified property set does not exist on the object."),
    MARSHALL_OVERFLOW = (0xC0000231, "the user/kernel marshaling buffer has overflowed."),
    INVALID_VARIANT = (0xC0000232, "the supplied variant structure contains invalid data."),
    DOMAIN_CONTROLLER_NOT_FOUND = (0xC0000233, "a domain controller for this domain was not found."),
    ACCOUNT_LOCKED_OUT = (0xC0000234, "the user account has been automatically locked because too many invalid logon attempts or password change attempts have been requested."),
    HANDLE_NOT_CLOSABLE = (0xC0000235, "ntclose was called on a handle that was protected from close via ntsetinformationobject."),
    CONNECTION_REFUSED = (0xC0000236, "the transport-connection attempt was refused by the remote system."),
    GRACEFUL_DISCONNECT = (0xC0000237, "the transport connection was gracefully closed."),
    ADDRESS_ALREADY_ASSOCIATED = (0xC0000238, "the transport endpoint already has an address associated with it."),
    ADDRESS_NOT_ASSOCIATED = (0xC0000239, "an address has not yet been associated with the transport endpoint."),
    CONNECTION_INVALID = (0xC000023A, "an operation was attempted on a nonexistent transport connection."),
    CONNECTION_ACTIVE = (0xC000023B, "an invalid operation was attempted on an active transport connection."),
    NETWORK_UNREACHABLE = (0xC000023C, "the remote network is not reachable by the transport."),
    HOST_UNREACHABLE = (0xC000023D, "the remote system is not reachable by the transport."),
    PROTOCOL_UNREACHABLE = (0xC000023E, "the remote system does not support the transport protocol."),
    PORT_UNREACHABLE = (0xC000023F, "no service is operating at the destination port of the transport on the remote system."),
    REQUEST_ABORTED = (0xC0000240, "the request was aborted."),
    CONNECTION_ABORTED = (0xC0000241, "the transport connection was aborted by the local system."),
    BAD_COMPRESSION_BUFFER = (0xC0000242, "the specified buffer contains ill-formed data."),
    USER_MAPPED_FILE = (0xC0000243, "the requested operation cannot be performed on a file with a user mapped section open."),
    AUDIT_FAILED = (0xC0000244, "{audit failed} an attempt to generate a security audit failed."),
    TIMER_RESOLUTION_NOT_SET = (0xC0000245, "the timer resolution was not previously set by the current process."),
    CONNECTION_COUNT_LIMIT = (0xC0000246, "a connection to the server could not be made because the limit on the number of concurrent connections for this account has been reached."),
    LOGIN_TIME_RESTRICTION = (0xC0000247, "attempting to log on during an unauthorized time of day for this account."),
    LOGIN_WKSTA_RESTRICTION = (0xC0000248, "the account is not authorized to log on from this station."),
    IMAGE_MP_UP_MISMATCH = (0xC0000249, "{up/mp image mismatch} the image %hs has been modified for use on a uniprocessor system, but you are running it on a multiprocessor machine. reinstall the image file."),
    INSUFFICIENT_LOGON_INFO = (0xC0000250, "there is insufficient account information to log you on."),
    BAD_DLL_ENTRYPOINT = (0xC0000251, "{invalid dll entrypoint} the dynamic link library %hs is not written correctly. the stack pointer has been left in an inconsistent state. the entry point should be declared as winapi or stdcall. select yes to fail the dll load. select no to continue execution. selecting no may cause the application to operate incorrectly."),
    BAD_SERVICE_ENTRYPOINT = (0xC0000252, "{invalid service callback entrypoint} the %hs service is not written correctly. the stack pointer has been left in an inconsistent state. the callback entry point should be declared as winapi or stdcall. selecting ok will cause the service to continue operation. however, the service process may operate incorrectly."),
    LPC_REPLY_LOST = (0xC0000253, "the server received the messages but did not send a reply."),
    IP_ADDRESS_CONFLICT1 = (0xC0000254, "there is an ip address conflict with another system on the network."),
    IP_ADDRESS_CONFLICT2 = (0xC0000255, "there is an ip address conflict with another system on the network."),
    REGISTRY_QUOTA_LIMIT = (0xC0000256, "{low on registry space} the system has reached the maximum size that is allowed for the system part of the registry. additional storage requests will be ignored."),
    PATH_NOT_COVERED = (0xC0000257, "the contacted server does not support the indicated part of the dfs namespace."),
    NO_CALLBACK_ACTIVE = (0xC0000258, "a callback return system service cannot be executed when no callback is active."),
    LICENSE_QUOTA_EXCEEDED = (0xC0000259, "the service being accessed is licensed for a particular number of connections. no more connections can be made to the service at this time because the service has already accepted the maximum number of connections."),
    PWD_TOO_SHORT = (0xC000025A, "the password provided is too short to meet the policy of your user account. choose a longer password."),
    PWD_TOO_RECENT = (0xC000025B, "the policy of your user account does not allow you to change passwords too frequently. this is done to prevent users from changing back to a familiar, but potentially discovered, password. if you feel your password has been compromised, contact your administrator immediately to have a new one assigned."),
    PWD_HISTORY_CONFLICT = (0xC000025C, "you have attempted to change your password to one that you have used in the past. the policy of your user account does not allow this. select a password that you have not previously used."),
    PLUGPLAY_NO_DEVICE = (0xC000025E, "you have attempted to load a legacy device driver while its device instance had been disabled."),
    UNSUPPORTED_COMPRESSION = (0xC000025F, "the specified compression format is unsupported."),
    INVALID_HW_PROFILE = (0xC0000260, "the specified hardware profile configuration is invalid."),
    INVALID_PLUGPLAY_DEVICE_PATH = (0xC0000261, "the specified plug and play registry device path is invalid."),
    DRIVER_ORDINAL_NOT_FOUND = (0xC0000262, "{driver entry point not found} the %hs device driver could not locate the ordinal %ld in driver %hs."),
    DRIVER_ENTRYPOINT_NOT_FOUND = (0xC0000263, "{driver entry point not found} the %hs device driver could not locate the entry point %hs in driver %hs."),
    RESOURCE_NOT_OWNED = (0xC0000264, "{application error} the application attempted to release a resource it did not own. click ok to terminate the application."),
    TOO_MANY_LINKS = (0xC0000265, "an attempt was made to create more links on a file than the file system supports."),
    QUOTA_LIST_INCONSISTENT = (0xC0000266, "the specified quota list is internally inconsistent with its descriptor."),
    FILE_IS_OFFLINE = (0xC0000267, "the specified file has been relocated to offline storage."),
    EVALUATION_EXPIRATION = (0xC0000268, "{windows evaluation notification} the evaluation period for this installation of windows has expired. this system will shutdown in 1 hour. to restore access to this installation of windows, upgrade this installation by using a licensed distribution of this product."),
    ILLEGAL_DLL_RELOCATION = (0xC0000269, "{illegal system dll relocation} the system dll %hs was relocated in memory. the application will not run properly. the relocation occurred because the dll %hs occupied an address range that is reserved for windows system dlls. the vendor supplying the dll should be contacted for a new dll."),
    LICENSE_VIOLATION = (0xC000026A, "{license violation} the system has detected tampering with your registered product type. this is a violation of your software license. tampering with the product type is not permitted."),
    DLL_INIT_FAILED_LOGOFF = (0xC000026B, "{dll initialization failed} the application failed to initialize because the window station is shutting down."),
    DRIVER_UNABLE_TO_LOAD = (0xC000026C, "{unable to load device driver} %hs device driver could not be loaded. error status was 0x%x."),
    DFS_UNAVAILABLE = (0xC000026D, "dfs is unavailable on the contacted server."),
    VOLUME_DISMOUNTED = (0xC000026E, "an operation was attempted to a volume after it was dismounted."),
    WX86_INTERNAL_ERROR = (0xC000026F, "an internal error occurred in the win32 x86 emulation subsystem."),
    WX86_FLOAT_STACK_CHECK = (0xC0000270, "win32 x86 emulation subsystem floating-point stack check."),
    VALIDATE_CONTINUE = (0xC0000271, "the validation process needs to continue on to the next step."),
    NO_MATCH = (0xC0000272, "there was no match for the specified key in the index."),
    NO_MORE_MATCHES = (0xC0000273, "there are no more matches for the current index enumeration."),
    NOT_A_REPARSE_POINT = (0xC0000275, "the nfts file or directory is not a reparse point."),
    IO_REPARSE_TAG_INVALID = (0xC0000276, "the windows i/o reparse tag passed for the nfts reparse point is invalid."),
    IO_REPARSE_TAG_MISMATCH = (0xC0000277, "the windows i/o reparse tag does not match the one that is in the nfts reparse point."),
    IO_REPARSE_DATA_INVALID = (0xC0000278, "the user data passed for the nfts reparse point is invalid."),
    IO_REPARSE_TAG_NOT_HANDLED = (0xC0000279, "the layered file system driver for this i/o tag did not handle it when needed."),
    REPARSE_POINT_NOT_RESOLVED = (0xC0000280, "the nfts symbolic link could not be resolved even though the initial file name is valid."),
    DIRECTORY_IS_A_REPARSE_POINT = (0xC0000281, "the nfts directory is a reparse point."),
    RANGE_LIST_CONFLICT = (0xC0000282, "the range could not be added to the range list because of a conflict."),
    SOURCE_ELEMENT_EMPTY = (0xC0000283, "the specified medium changer source element contains no media."),
    DESTINATION_ELEMENT_FULL = (0xC0000284, "the specified medium changer destination element already contains media."),
    ILLEGAL_ELEMENT_ADDRESS = (0xC0000285, "the specified medium changer element does not exist."),
    MAGAZINE_NOT_PRESENT = (0xC0000286, "the specified element is contained in a magazine that is no longer present."),
    REINITIALIZATION_NEEDED = (0xC0000287, "the device requires re-initialization due to hardware errors."),
    ENCRYPTION_FAILED = (0xC000028A, "the file encryption attempt failed."),
    DECRYPTION_FAILED = (0xC000028B, "the file decryption attempt failed."),
    RANGE_NOT_FOUND = (0xC000028C, "the specified range could not be found in the range list."),
    NO_RECOVERY_POLICY = (0xC000028D, "there is no encryption recovery policy configured for this system."),
    NO_EFS = (0xC000028E, "the required encryption driver is not loaded for this system."),
    WRONG_EFS = (0xC000028F, "the file was encrypted with a different encryption driver than is currently loaded."),
    NO_USER_KEYS = (0xC0000290, "there are no efs keys defined for the user."),
    FILE_NOT_ENCRYPTED = (0xC0000291, "the specified file is not encrypted."),
    NOT_EXPORT_FORMAT = (0xC0000292, "the specified file is not in the defined efs export format."),
    FILE_ENCRYPTED = (0xC0000293, "the specified file is encrypted and the user does not have the ability to decrypt it."),
    WMI_GUID_NOT_FOUND = (0xC0000295, "the guid passed was not recognized as valid by a wmi data provider."),
    WMI_INSTANCE_NOT_FOUND = (0xC0000296, "the instance name passed was not recognized as valid by a wmi data provider."),
    WMI_ITEMID_NOT_FOUND = (0xC0000297, "the data item id passed was not recognized as valid by a wmi data provider."),
    WMI_TRY_AGAIN = (0xC0000298, "the wmi request could not be completed and should be retried."),
    SHARED_POLICY = (0xC0000299, "the policy object is shared and can only be modified at the root."),
    POLICY_OBJECT_NOT_FOUND = (0xC000029A, "the policy object does not exist when it should."),
    POLICY_ONLY_IN_DS = (0xC000029B, "the requested policy information only lives in the ds."),
    VOLUME_NOT_UPGRADED = (0xC000029C, "the volume must be upgraded to enable this feature."),
    REMOTE_STORAGE_NOT_ACTIVE = (0xC000029D, "the remote storage service is not operational at this time."),
    REMOTE_STORAGE_MEDIA_ERROR = (0xC000029E, "the remote storage service encountered a media error."),
    NO_TRACKING_SERVICE = (0xC000029F, "the tracking (workstation) service is not running."),
    SERVER_SID_MISMATCH = (0xC00002A0, "the server process is running under a sid that is different from the sid that is required by client."),
    DS_NO_ATTRIBUTE_OR_VALUE = (0xC00002A1, "the specified directory service attribute or value does not exist."),
    DS_INVALID_ATTRIBUTE_SYNTAX = (0xC00002A2, "the attribute syntax specified to the directory service is invalid."),
    DS_ATTRIBUTE_TYPE_UNDEFINED = (0xC00002A3, "the attribute type specified to the directory service is not defined."),
    DS_ATTRIBUTE_OR_VALUE_EXISTS = (0xC00002A4, "the specified directory service attribute or value already exists."),
    DS_BUSY = (0xC00002A5, "the directory service is busy."),
    DS_UNAVAILABLE = (0xC00002A6, "the directory service is unavailable."),
    DS_NO_RIDS_ALLOCATED = (0xC00002A7, "the directory service was unable to allocate a relative identifier."),
    DS_NO_MORE_RIDS = (0xC00002A8, "the directory service has exhausted the pool of relative identifiers."),
    DS_INCORRECT_ROLE_OWNER = (0xC00002A9, "the requested operation could not be performed because the directory service is not the master for that type of operation."),
    DS_RIDMGR_INIT_ERROR = (0xC00002AA, "the directory service was unable to initialize the subsystem that allocates relative identifiers."),
    DS_OBJ_CLASS_VIOLATION = (0xC00002AB, "the requested operation did not satisfy one or more constraints that are associated with the class of the object."),
    DS_CANT_ON_NON_LEAF = (0xC00002AC, "the directory service can perform the requested operation only on a leaf object."),
    DS_CANT_ON_RDN = (0xC00002AD, "the directory service cannot perform the requested operation on the relatively defined name (rdn) attribute of an object."),
    DS_CANT_MOD_OBJ_CLASS = (0xC00002AE, "the directory service detected an attempt to modify the object class of an object."),
    DS_CROSS_DOM_MOVE_FAILED = (0xC00002AF, "an error occurred while performing a cross domain move operation."),
    DS_GC_NOT_AVAILABLE = (0xC00002B0, "unable to contact the global catalog server."),
    DIRECTORY_SERVICE_REQUIRED = (0xC00002B1, "the requested operation requires a directory service, and none was available."),
    REPARSE_ATTRIBUTE_CONFLICT = (0xC00002B2, "the reparse attribute cannot be set because it is incompatible with an existing attribute."),
    CANT_ENABLE_DENY_ONLY = (0xC00002B3, "a group marked \"use for deny only\" cannot be enabled."),
    FLOAT_MULTIPLE_FAULTS = (0xC00002B4, "{exception} multiple floating-point faults."),
    FLOAT_MULTIPLE_TRAPS = (0xC00002B5, "{exception} multiple floating-point traps."),
    DEVICE_REMOVED = (0xC00002B6, "the device has been removed."),
    JOURNAL_DELETE_IN_PROGRESS = (0xC00002B7, "the volume change journal is being deleted."),
    JOURNAL_NOT_ACTIVE = (0xC00002B8, "the volume change journal is not active."),
    NOINTERFACE = (0xC00002B9, "the requested interface is not supported."),
    DS_ADMIN_LIMIT_EXCEEDED = (0xC00002C1, "a directory service resource limit has been exceeded."),
    DRIVER_FAILED_SLEEP = (0xC00002C2, "{system standby failed} the driver %hs does not support standby mode. updating this driver may allow the system to go to standby mode."),
    MUTUAL_AUTHENTICATION_FAILED = (0xC00002C3, "mutual authentication failed. the server password is out of date at the domain controller."),
    CORRUPT_SYSTEM_FILE = (0xC00002C4, "the system file %1 has become corrupt and has been replaced."),
    DATATYPE_MISALIGNMENT_ERROR = (0xC00002C5, "{exception} alignment error a data type misalignment error was detected in a load or store instruction."),
    WMI_READ_ONLY = (0xC00002C6, "the wmi data item or data block is read-only."),
    WMI_SET_FAILURE = (0xC00002C7, "the wmi data item or data block could not be changed."),
    COMMITMENT_MINIMUM = (0xC00002C8, "{virtual memory minimum too low} your system is low on virtual memory. windows is increasing the size of your virtual memory paging file. during this process, memory requests for some applications may be denied. for more information, see help."),
    REG_NAT_CONSUMPTION = (0xC00002C9, "{exception} register nat consumption faults. a nat value is consumed on a non-speculative instruction."),
    TRANSPORT_FULL = (0xC00002CA, "the transport element of the medium changer contains media, which is causing the operation to fail."),
    DS_SAM_INIT_FAILURE = (0xC00002CB, "security accounts manager initialization failed because of the following error: %hs error status: 0x%x. click ok to shut down this system and restart in directory services restore mode. check the event log for more detailed information."),
    ONLY_IF_CONNECTED = (0xC00002CC, "this operation is supported only when you are connected to the server."),
    DS_SENSITIVE_GROUP_VIOLATION = (0xC00002CD, "only an administrator can modify the membership list of an administrative group."),
    PNP_RESTART_ENUMERATION = (0xC00002CE, "a device was removed so enumeration must be restarted."),
    JOURNAL_ENTRY_DELETED = (0xC00002CF, "the journal entry has been deleted from the journal."),
    DS_CANT_MOD_PRIMARYGROUPID = (0xC00002D0, "cannot change the primary group id of a domain controller account."),
    SYSTEM_IMAGE_BAD_SIGNATURE = (0xC00002D1, "{fatal system error} the system image %s is not properly signed. the file has been replaced with the signed file. the system has been shut down."),
    PNP_REBOOT_REQUIRED = (0xC00002D2, "the device will not start without a reboot."),
    POWER_STATE_INVALID = (0xC00002D3, "the power state of the current device cannot support this request."),
    DS_INVALID_GROUP_TYPE = (0xC00002D4, "the specified group type is invalid."),
    DS_NO_NEST_GLOBALGROUP_IN_MIXEDDOMAIN = (0xC00002D5, "in a mixed domain, no nesting of a global group if the group is security enabled."),
    DS_NO_NEST_LOCALGROUP_IN_MIXEDDOMAIN = (0xC00002D6, "in a mixed domain, cannot nest local groups with other local groups, if the group is security enabled."),
    DS_GLOBAL_CANT_HAVE_LOCAL_MEMBER = (0xC00002D7, "a global group cannot have a local group as a member."),
    DS_GLOBAL_CANT_HAVE_UNIVERSAL_MEMBER = (0xC00002D8, "a global group cannot have a universal group as a member."),
    DS_UNIVERSAL_CANT_HAVE_LOCAL_MEMBER = (0xC00002D9, "a universal group cannot have a local group as a member."),
    DS_GLOBAL_CANT_HAVE_CROSSDOMAIN_MEMBER = (0xC00002DA, "a global group cannot have a cross-domain member."),
    DS_LOCAL_CANT_HAVE_CROSSDOMAIN_LOCAL_MEMBER = (0xC00002DB, "a local group cannot have another cross-domain local group as a member."),
    DS_HAVE_PRIMARY_MEMBERS = (0xC00002DC, "cannot change to a security-disabled group because primary members are in this group."),
    WMI_NOT_SUPPORTED = (0xC00002DD, "the wmi operation is not supported by the data block or method."),
    INSUFFICIENT_POWER = (0xC00002DE, "there is not enough power to complete the requested operation."),
    SAM_NEED_BOOTKEY_PASSWORD = (0xC00002DF, "the security accounts manager needs to get the boot password."),
    SAM_NEED_BOOTKEY_FLOPPY = (0xC00002E0, "the security accounts manager needs to get the boot key from the floppy disk."),
    DS_CANT_START = (0xC00002E1, "the directory service cannot start."),
    DS_INIT_FAILURE = (0xC00002E2, "the directory service could not start because of the following error: %hs error status: 0x%x. click ok to shut down this system and restart in directory services restore mode. check the event log for more detailed information."),
    SAM_INIT_FAILURE = (0xC00002E3, "the security accounts manager initialization failed because of the following error: %hs error status: 0x%x. click ok to shut down this system and restart in safe mode. check the event log for more detailed information."),
    DS_GC_REQUIRED = (0xC00002E4, "the requested operation can be performed only on a global catalog server."),
    DS_LOCAL_MEMBER_OF_LOCAL_ONLY = (0xC00002E5, "a local group can only be a member of other local groups in the same domain."),
    DS_NO_FPO_IN_UNIVERSAL_GROUPS = (0xC00002E6, "foreign security principals cannot be members of universal groups."),
    DS_MACHINE_ACCOUNT_QUOTA_EXCEEDED = (0xC00002E7, "your computer could not be joined to the domain. you have exceeded the maximum number of computer accounts you are allowed to create in this domain. contact your system administrator to have this limit reset or increased."),
    CURRENT_DOMAIN_NOT_ALLOWED = (0xC00002E9, "this operation cannot be performed on the current domain."),
    CANNOT_MAKE = (0xC00002EA, "the directory or file cannot be created."),
    SYSTEM_SHUTDOWN = (0xC00002EB, "the system is in the process of shutting down."),
    DS_INIT_FAILURE_CONSOLE = (0xC00002EC, "directory services could not start because of the following error: %hs error status: 0x%x. click ok to shut down the system. you can use the recovery console to diagnose the system further."),
    DS_SAM_INIT_FAILURE_CONSOLE = (0xC00002ED, "security accounts manager initialization failed because of the following error: %hs error status: 0x%x. click ok to shut down the system. you can use the recovery console to diagnose the system further."),
    UNFINISHED_CONTEXT_DELETED = (0xC00002EE, "a security context was deleted before the context was completed. this is considered a logon failure."),
    NO_TGT_REPLY = (0xC00002EF, "the client is trying to negotiate a context and the server requires user-to-user but did not send a tgt reply."),
    OBJECTID_NOT_FOUND = (0xC00002F0, "an object id was not found in the file."),
    NO_IP_ADDRESSES = (0xC00002F1, "unable to accomplish the requested task because the local machine does not have any ip addresses."),
    WRONG_CREDENTIAL_HANDLE = (0xC00002F2, "the supplied credential handle does not match the credential that is associated with the security context."),
    CRYPTO_SYSTEM_INVALID = (0xC00002F3, "the crypto system or checksum function is invalid because a required function is unavailable."),
    MAX_REFERRALS_EXCEEDED = (0xC00002F4, "the number of maximum ticket referrals has been exceeded."),
    MUST_BE_KDC = (0xC00002F5, "the local machine must be a kerberos kdc (domain controller) and it is not."),
    STRONG_CRYPTO_NOT_SUPPORTED = (0xC00002F6, "the other end of the security negotiation requires strong crypto but it is not supported on the local machine."),
    TOO_MANY_PRINCIPALS = (0xC00002F7, "the kdc reply contained more than one principal name."),
    NO_PA_DATA = (0xC00002F8, "expected to find pa data for a hint of what etype to use, but it was not found."),
    PKINIT_NAME_MISMATCH = (0xC00002F9, "the client certificate does not contain a valid upn, or does not match the client name in the logon request. contact your administrator."),
    SMARTCARD_LOGON_REQUIRED = (0xC00002FA, "smart card logon is required and was not used."),
    KDC_INVALID_REQUEST = (0xC00002FB, "an invalid request was sent to the kdc."),
    KDC_UNABLE_TO_REFER = (0xC00002FC, "the kdc was unable to generate a referral for the service requested."),
    KDC_UNKNOWN_ETYPE = (0xC00002FD, "the encryption type requested is not supported by the kdc."),
    SHUTDOWN_IN_PROGRESS = (0xC00002FE, "a system shutdown is in progress."),
    SERVER_SHUTDOWN_IN_PROGRESS = (0xC00002FF, "the server machine is shutting down."),
    NOT_SUPPORTED_ON_SBS = (0xC0000300, "this operation is not supported on a computer running windows server 2003 operating system for small business server."),
    WMI_GUID_DISCONNECTED = (0xC0000301, "the wmi guid is no longer available."),
    WMI_ALREADY_DISABLED = (0xC0000302, "collection or events for the wmi guid is already disabled."),
    WMI_ALREADY_ENABLED = (0xC0000303, "collection or events for the wmi guid is already enabled."),
    MFT_TOO_FRAGMENTED = (0xC0000304, "the master file table on the volume is too fragmented to complete this operation."),
    COPY_PROTECTION_FAILURE = (0xC0000305, "copy protection failure."),
    CSS_AUTHENTICATION_FAILURE = (0xC0000306, "copy protection error-dvd css authentication failed."),
    CSS_KEY_NOT_PRESENT = (0xC0000307, "copy protection error-the specified sector does not contain a valid key."),
    CSS_KEY_NOT_ESTABLISHED = (0xC0000308, "copy protection error-dvd session key not established."),
    CSS_SCRAMBLED_SECTOR = (0xC0000309, "copy protection error-the read failed because the sector is encrypted."),
    CSS_REGION_MISMATCH = (0xC000030A, "copy protection error-the region of the specified dvd does not correspond to the region setting of the drive."),
    CSS_RESETS_EXHAUSTED = (0xC000030B, "copy protection error-the region setting of the drive may be permanent."),
    PKINIT_FAILURE = (0xC0000320, "the kerberos protocol encountered an error while validating the kdc certificate during smart card logon. there is more information in the system event log."),
    SMARTCARD_SUBSYSTEM_FAILURE = (0xC0000321, "the kerberos protocol encountered an error while attempting to use the smart card subsystem."),
    NO_KERB_KEY = (0xC0000322, "the target server does not have acceptable kerberos credentials."),
    HOST_DOWN = (0xC0000350, "the transport determined that the remote system is down."),
    UNSUPPORTED_PREAUTH = (0xC0000351, "an unsupported pre-authentication mechanism was presented to the kerberos package."),
    EFS_ALG_BLOB_TOO_BIG = (0xC0000352, "the encryption algorithm that is used on the source file needs a bigger key buffer than the one that is used on the destination file."),
    PORT_NOT_SET = (0xC0000353, "an attempt to remove a processes debugport was made, but a port was not already associated with the process."),
    DEBUGGER_INACTIVE = (0xC0000354, "an attempt to do an operation on a debug port failed because the port is in the process of being deleted."),
    DS_VERSION_CHECK_FAILURE = (0xC0000355, "this version of windows is not compatible with the behavior version of the directory forest, domain, or domain controller."),
    AUDITING_DISABLED = (0xC0000356, "the specified event is currently not being audited."),
    PRENT4_MACHINE_ACCOUNT = (0xC0000357, "the machine account was created prior to windows nt 4.0 operating system. the account needs to be recreated."),
    DS_AG_CANT_HAVE_UNIVERSAL_MEMBER = (0xC0000358, "an account group cannot have a universal group as a member."),
    INVALID_IMAGE_WIN_32 = (0xC0000359, "the specified image file did not have the correct format; it appears to be a 32-bit windows image."),
    INVALID_IMAGE_WIN_64 = (0xC000035A, "the specified image file did not have the correct format; it appears to be a 64-bit windows image."),
    BAD_BINDINGS = (0xC000035B, "the client's supplied sspi channel bindings were incorrect."),
    NETWORK_SESSION_EXPIRED = (0xC000035C, "the client session has expired; so the client must re-authenticate to continue accessing the remote resources."),
    APPHELP_BLOCK = (0xC000035D, "the apphelp dialog box canceled; thus preventing the application from starting."),
    ALL_SIDS_FILTERED = (0xC000035E, "the sid filtering operation removed all sids."),
    NOT_SAFE_MODE_DRIVER = (0xC000035F, "the driver was not loaded because the system is starting in safe mode."),
    ACCESS_DISABLED_BY_POLICY_DEFAULT = (0xC0000361, "access to %1 has been restricted by your administrator by the default software restriction policy level."),
    ACCESS_DISABLED_BY_POLICY_PATH = (0xC0000362, "access to %1 has been restricted by your administrator by location with policy rule %2 placed on path %3."),
    ACCESS_DISABLED_BY_POLICY_PUBLISHER = (0xC0000363, "access to %1 has been restricted by your administrator by software publisher policy."),
    ACCESS_DISABLED_BY_POLICY_OTHER = (0xC0000364, "access to %1 has been restricted by your administrator by policy rule %2."),
    FAILED_DRIVER_ENTRY = (0xC0000365, "the driver was not loaded because it failed its initialization call."),
    DEVICE_ENUMERATION_ERROR = (0xC0000366, "the device encountered an error while applying power or reading the device configuration. this may be caused by a failure of your hardware or by a poor connection."),
    MOUNT_POINT_NOT_RESOLVED = (0xC0000368, "the create operation failed because the name contained at least one mount point that resolves to a volume to which the specified device object is not attached."),
    INVALID_DEVICE_OBJECT_PARAMETER = (0xC0000369, "the device object parameter is either not a valid device object or is not attached to the volume that is specified by the file name."),
    MCA_OCCURED = (0xC000036A, "a machine check error has occurred. check the system event log for additional information."),
    DRIVER_BLOCKED_CRITICAL = (0xC000036B, "driver %2 has been blocked from loading."),
    DRIVER_BLOCKED = (0xC000036C, "driver %2 has been blocked from loading."),
    DRIVER_DATABASE_ERROR = (0xC000036D, "there was error [%2] processing the driver database."),
    SYSTEM_HIVE_TOO_LARGE = (0xC000036E, "system hive size has exceeded its limit."),
    INVALID_IMPORT_OF_NON_DLL = (0xC000036F, "a dynamic link library (dll) referenced a module that was neither a dll nor the process's executable image."),
    NO_SECRETS = (0xC0000371, "the local account store does not contain secret material for the specified account."),
    ACCESS_DISABLED_NO_SAFER_UI_BY_POLICY = (0xC0000372, "access to %1 has been restricted by your administrator by policy rule %2."),
    FAILED_STACK_SWITCH = (0xC0000373, "the system was not able to allocate enough memory to perform a stack switch."),
    HEAP_CORRUPTION = (0xC0000374, "a heap has been corrupted."),
    SMARTCARD_WRONG_PIN = (0xC0000380, "an incorrect pin was presented to the smart card."),
    SMARTCARD_CARD_BLOCKED = (0xC0000381, "the smart card is blocked."),
    SMARTCARD_CARD_NOT_AUTHENTICATED = (0xC0000382, "no pin was presented to the smart card."),
    SMARTCARD_NO_CARD = (0xC0000383, "no smart card is available."),
    SMARTCARD_NO_KEY_CONTAINER = (0xC0000384, "the requested key container does not exist on the smart card."),
    SMARTCARD_NO_CERTIFICATE = (0xC0000385, "the requested certificate does not exist on the smart card."),
    SMARTCARD_NO_KEYSET = (0xC0000386, "the requested keyset does not exist."),
    SMARTCARD_IO_ERROR = (0xC0000387, "a communication error with the smart card has been detected."),
    DOWNGRADE_DETECTED = (0xC0000388, "the system detected a possible attempt to compromise security. ensure that you can contact the server that authenticated you."),
    SMARTCARD_CERT_REVOKED = (0xC0000389, "the smart card certificate used for authentication has been revoked. contact your system administrator. there may be additional information in the event log."),
    ISSUING_CA_UNTRUSTED = (0xC000038A, "an untrusted certificate authority was detected while processing the smart card certificate that is used for authentication. contact your system administrator."),
    REVOCATION_OFFLINE_C = (0xC000038B, "the revocation status of the smart card certificate that is used for authentication could not be determined. contact your system administrator."),
    PKINIT_CLIENT_FAILURE = (0xC000038C, "the smart card certificate used for authentication was not trusted. contact your system administrator."),
    SMARTCARD_CERT_EXPIRED = (0xC000038D, "the smart card certificate used for authentication has expired. contact your system administrator."),
    DRIVER_FAILED_PRIOR_UNLOAD = (0xC000038E, "the driver could not be loaded because a previous version of the driver is still in memory."),
    SMARTCARD_SILENT_CONTEXT = (0xC000038F, "the smart card provider could not perform the action because the context was acquired as silent."),
    PER_USER_TRUST_QUOTA_EXCEEDED = (0xC0000401, "the delegated trust creation quota of the current user has been exceeded."),
    ALL_USER_TRUST_QUOTA_EXCEEDED = (0xC0000402, "the total delegated trust creation quota has been exceeded."),
    USER_DELETE_TRUST_QUOTA_EXCEEDED = (0xC0000403, "the delegated trust deletion quota of the current user has been exceeded."),
    DS_NAME_NOT_UNIQUE = (0xC0000404, "the requested name already exists as a unique identifier."),
    DS_DUPLICATE_ID_FOUND = (0xC0000405, "the requested object has a non-unique identifier and cannot be retrieved."),
    DS_GROUP_CONVERSION_ERROR = (0xC0000406, "the group cannot be converted due to attribute restrictions on the requested group type."),
    VOLSNAP_PREPARE_HIBERNATE = (0xC0000407, "{volume shadow copy service} wait while the volume shadow copy service prepares volume %hs for hibernation."),
    USER2USER_REQUIRED = (0xC0000408, "kerberos sub-protocol user2user is required."),
    STACK_BUFFER_OVERRUN = (0xC0000409, "the system detected an overrun of a stack-based buffer in this application. this overrun could potentially allow a malicious user to gain control of this application."),
    NO_S4U_PROT_SUPPORT = (0xC000040A, "the kerberos subsystem encountered an error. a service for user protocol request was made against a domain controller which does not support service for user."),
    CROSSREALM_DELEGATION_FAILURE = (0xC000040B, "an attempt was made by this server to make a kerberos constrained delegation request for a target that is outside the server realm. this action is not supported and the resulting error indicates a misconfiguration on the server. contact the administrator of this server."),
    REVOCATION_OFFLINE_KDC = (0xC000040C, "the revocation status of the domain controller certificate used for smart card authentication could not be determined. there is additional information in the system event log. contact your system administrator."),
    ISSUING_CA_UNTRUSTED_KDC = (0xC000040D, "an untrusted certificate authority was detected while processing the domain controller certificate used for authentication. there is additional information in the system event log. contact your system administrator."),
    KDC_CERT_EXPIRED = (0xC000040E, "the domain controller certificate used for smart card logon has expired. contact your system administrator with the contents of your system event log."),
    KDC_CERT_REVOKED = (0xC000040F, "the domain controller certificate used for smart card logon has been revoked. contact your system administrator with the contents of your system event log."),
    PARAMETER_QUOTA_EXCEEDED = (0xC0000410, "data present in one of the parameters is more than the function can operate on."),
    HIBERNATION_FAILURE = (0xC0000411, "the system has failed to hibernate (the error code is %hs). hibernation will be disabled until the system is restarted."),
    DELAY_LOAD_FAILED = (0xC0000412, "an attempt to delay-load a .dll or get a function address in a delay-loaded .dll failed."),
    AUTHENTICATION_FIREWALL_FAILED = (0xC0000413, "logon failure: the machine you are logging onto is protected by an authentication firewall. the specified account is not allowed to authenticate to the machine."),
    VDM_DISALLOWED = (0xC0000414, "%hs is a 16-bit application. you do not have permissions to execute 16-bit applications. check your permissions with your system administrator."),
    HUNG_DISPLAY_DRIVER_THREAD = (0xC0000415, "{display driver stopped responding} the %hs display driver has stopped working normally. save your work and reboot the system to restore full display functionality. the next time you reboot the computer, a dialog box will allow you to upload data about this failure to microsoft."),
    INSUFFICIENT_RESOURCE_FOR_SPECIFIED_SHARED_SECTION_SIZE = (0xC0000416, "the desktop heap encountered an error while allocating session memory. there is more information in the system event log."),
    INVALID_CRUNTIME_PARAMETER = (0xC0000417, "an invalid parameter was passed to a c runtime function."),
    NTLM_BLOCKED = (0xC0000418, "the authentication failed because ntlm was blocked."),
    DS_SRC_SID_EXISTS_IN_FOREST = (0xC0000419, "the source object's sid already exists in destination forest."),
    DS_DOMAIN_NAME_EXISTS_IN_FOREST = (0xC000041A, "the domain name of the trusted domain already exists in the forest."),
    DS_FLAT_NAME_EXISTS_IN_FOREST = (0xC000041B, "the flat name of the trusted domain already exists in the forest."),
    INVALID_USER_PRINCIPAL_NAME = (0xC000041C, "the user principal name (upn) is invalid."),
    ASSERTION_FAILURE = (0xC0000420, "there has been an assertion failure."),
    VERIFIER_STOP = (0xC0000421, "application verifier has found an error in the current process."),
    CALLBACK_POP_STACK = (0xC0000423, "a user mode unwind is in progress."),
    INCOMPATIBLE_DRIVER_BLOCKED = (0xC0000424, "%2 has been blocked from loading due to incompatibility with this system. contact your software vendor for a compatible version of the driver."),
    HIVE_UNLOADED = (0xC0000425, "illegal operation attempted on a registry key which has already been unloaded."),
    COMPRESSION_DISABLED = (0xC0000426, "compression is disabled for this volume."),
    FILE_SYSTEM_LIMITATION = (0xC0000427, "the requested operation could not be completed due to a file system limitation."),
    INVALID_IMAGE_HASH = (0xC0000428, "the hash for image %hs cannot be found in the system catalogs. the image is likely corrupt or the victim of tampering."),
    NOT_CAPABLE = (0xC0000429, "the implementation is not capable of performing the request."),
    REQUEST_OUT_OF_SEQUENCE = (0xC000042A, "the requested operation is out of order with respect to other operations."),
    IMPLEMENTATION_LIMIT = (0xC000042B, "an operation attempted to exceed an implementation-defined limit."),
    ELEVATION_REQUIRED = (0xC000042C, "the requested operation requires elevation."),
    NO_SECURITY_CONTEXT = (0xC000042D, "the required security context does not exist."),
    PKU2U_CERT_FAILURE = (0xC000042E, "the pku2u protocol encountered an error while attempting to utilize the associated certificates."),
    BEYOND_VDL = (0xC0000432, "the operation was attempted beyond the valid data length of the file."),
    ENCOUNTERED_WRITE_IN_PROGRESS = (0xC0000433, "the attempted write operation encountered a write already in progress for some portion of the range."),
    PTE_CHANGED = (0xC0000434, "the page fault mappings changed in the middle of processing a fault so the operation must be retried."),
    PURGE_FAILED = (0xC0000435, "the attempt to purge this file from memory failed to purge some or all the data from memory."),
    CRED_REQUIRES_CONFIRMATION = (0xC0000440, "the requested credential requires confirmation."),
    CS_ENCRYPTION_INVALID_SERVER_RESPONSE = (0xC0000441, "the remote server sent an invalid response for a file being opened with client side encryption."),
    CS_ENCRYPTION_UNSUPPORTED_SERVER = (0xC0000442, "client side encryption is not supported by the remote server even though it claims to support it."),
    CS_ENCRYPTION_EXISTING_ENCRYPTED_FILE = (0xC0000443, "file is encrypted and should be opened in client side encryption mode."),
    CS_ENCRYPTION_NEW_ENCRYPTED_FILE = (0xC0000444, "a new encrypted file is being created and a $efs needs to be provided."),
    CS_ENCRYPTION_FILE_NOT_CSE = (0xC0000445, "the smb client requested a cse fsctl on a non-cse file."),
    INVALID_LABEL = (0xC0000446, "indicates a particular security id may not be assigned as the label of an object."),
    DRIVER_PROCESS_TERMINATED = (0xC0000450, "the process hosting the driver for this device has terminated."),
    AMBIGUOUS_SYSTEM_DEVICE = (0xC0000451, "the requested system device cannot be identified due to multiple indistinguishable devices potentially matching the identification criteria."),
    SYSTEM_DEVICE_NOT_FOUND = (0xC0000452, "the requested system device cannot be found."),
    RESTART_BOOT_APPLICATION = (0xC0000453, "this boot application must be restarted."),
    INSUFFICIENT_NVRAM_RESOURCES = (0xC0000454, "insufficient nvram resources exist to complete the api. a reboot might be required."),
    NO_RANGES_PROCESSED = (0xC0000460, "no ranges for the specified operation were able to be processed."),
    DEVICE_FEATURE_NOT_SUPPORTED = (0xC0000463, "the storage device does not support offload write."),
    DEVICE_UNREACHABLE = (0xC0000464, "data cannot be moved because the source device cannot communicate with the destination device."),
    INVALID_TOKEN = (0xC0000465, "to use the specified data, the data must be within the range of the token."),
    SERVER_UNAVAILABLE = (0xC0000466, "the file server is temporarily unavailable."),
    FILE_NOT_AVAILABLE = (0xC0000467, "the file is temporarily unavailable."),
    DEVICE_INSUFFICIENT_RESOURCES = (0xC0000468, "the device does not have sufficient resources to complete the operation."),
    PACKAGE_UPDATING = (0xC0000469, "the package is being updated."),
    NOT_READ_FROM_COPY = (0xC000046A, "the operation could not be completed on the primary copy of the data."),
    FT_WRITE_FAILURE = (0xC000046B, "the write operation failed on the redundant copy of the data."),
    FT_DI_SCAN_REQUIRED = (0xC000046C, "the data integrity scan of the volume is required."),
    OBJECT_NOT_EXTERNALLY_BACKED = (0xC000046D, "the object is not externally backed."),
    EXTERNAL_BACKING_PROVIDER_UNKNOWN = (0xC000046E, "the external backing provider is not recognized."),
    DATA_CHECKSUM_ERROR = (0xC0000470, "a data integrity checksum error occurred. data in the file stream is corrupt."),
    INTERMIXED_KERNEL_EA_OPERATION = (0xC0000471, "an attempt was made to modify both a kernel and normal extended attribute (ea) in the same operation."),
    TRIM_READ_ZERO_NOT_SUPPORTED = (0xC0000472, "the device does not support read zero after trim."),
    TOO_MANY_SEGMENT_DESCRIPTORS = (0xC0000473, "too many segment descriptors were supplied for the operation."),
    INVALID_OFFSET_ALIGNMENT = (0xC0000474, "the offset is not aligned to the device requirements."),
    INVALID_FIELD_IN_PARAMETER_LIST = (0xC0000475, "a field in the parameter list is invalid."),
    OPERATION_IN_PROGRESS = (0xC0000476, "an operation is in progress."),
    INVALID_INITIATOR_TARGET_PATH = (0xC0000477, "the initiator target path is invalid."),
    SCRUB_DATA_DISABLED = (0xC0000478, "scrub data is disabled for this volume."),
    NOT_REDUNDANT_STORAGE = (0xC0000479, "the storage is not redundant."),
    RESIDENT_FILE_NOT_SUPPORTED = (0xC000047A, "the operation is not supported on a resident file."),
    COMPRESSED_FILE_NOT_SUPPORTED = (0xC000047B, "the operation is not supported on a compressed file."),
    DIRECTORY_NOT_SUPPORTED = (0xC000047C, "the operation is not supported on a directory."),
    IO_OPERATION_TIMEOUT = (0xC000047D, "the i/o operation timed out."),
    SYSTEM_NEEDS_REMEDIATION = (0xC000047E, "the system needs remediation."),
    APPX_INTEGRITY_FAILURE_CLR_NGEN = (0xC000047F, "the appx package integrity check failed."),
    SHARE_UNAVAILABLE = (0xC0000480, "the share is unavailable."),
    APISET_NOT_HOSTED = (0xC0000481, "the api set is not hosted."),
    APISET_NOT_PRESENT = (0xC0000482, "the api set is not present."),
    DEVICE_HARDWARE_ERROR = (0xC0000483, "the device reported a hardware error."),
    INVALID_TASK_NAME = (0xC0000500, "the specified task name is invalid."),
    INVALID_TASK_INDEX = (0xC0000501, "the specified task index is invalid."),
    THREAD_ALREADY_IN_TASK = (0xC0000502, "the specified thread is already joining a task."),
    CALLBACK_BYPASS = (0xC0000503, "a callback has requested to bypass native code."),
    FAIL_FAST_EXCEPTION = (0xC0000602, "a fail fast exception occurred. exception handlers will not be invoked and the process will be terminated immediately."),
    IMAGE_CERT_REVOKED = (0xC0000603, "windows cannot verify the digital signature for this file. the signing certificate for this file has been revoked."),
    PORT_CLOSED = (0xC0000700, "the alpc port is closed."),
    MESSAGE_LOST = (0xC0000701, "the alpc message requested is no longer available."),
    INVALID_MESSAGE = (0xC0000702, "the alpc message supplied is invalid."),
    REQUEST_CANCELED = (0xC0000703, "the alpc message has been canceled."),
    RECURSIVE_DISPATCH = (0xC0000704, "invalid recursive dispatch attempt."),
    LPC_RECEIVE_BUFFER_EXPECTED = (0xC0000705, "no receive buffer has been supplied in a synchronous request."),
    LPC_INVALID_CONNECTION_USAGE = (0xC0000706, "the connection port is used in an invalid context."),
    LPC_REQUESTS_NOT_ALLOWED = (0xC0000707, "the alpc port does not accept new request messages."),
    RESOURCE_IN_USE = (0xC0000708, "the resource requested is already in use."),
    HARDWARE_MEMORY_ERROR = (0xC0000709, "the hardware has reported an uncorrectable memory error."),
    THREADPOOL_HANDLE_EXCEPTION = (0xC000070A, "status 0x%08x was returned, waiting on handle 0x%x for wait 0x%p, in waiter 0x%p."),
    THREADPOOL_SET_EVENT_ON_COMPLETION_FAILED = (0xC000070B, "after a callback to 0x%p(0x%p), a completion call to setevent(0x%p) failed with status 0x%08x."),
    THREADPOOL_RELEASE_SEMAPHORE_ON_COMPLETION_FAILED = (0xC000070C, "after a callback to 0x%p(0x%p), a completion call to releasesemaphore(0x%p, %d) failed with status 0x%08x."),
    THREADPOOL_RELEASE_MUTEX_ON_COMPLETION_FAILED = (0xC000070D, "after a callback to 0x%p(0x%p), a completion call to releasemutex(%p) failed with status 0x%08x."),
    THREADPOOL_FREE_LIBRARY_ON_COMPLETION_FAILED = (0xC000070E, "after a callback to 0x%p(0x%p), a completion call to freelibrary(%p) failed with status 0x%08x."),
    THREADPOOL_RELEASED_DURING_OPERATION = (0xC000070F, "the thread pool 0x%p was released while a thread was posting a callback to 0x%p(0x%p) to it."),
    CALLBACK_RETURNED_WHILE_IMPERSONATING = (0xC0000710, "a thread pool worker thread is impersonating a client, after a callback to 0x%p(0x%p). this is unexpected, indicating that the callback is missing a call to revert the impersonation."),
    APC_RETURNED_WHILE_IMPERSONATING = (0xC0000711, "a thread pool worker thread is impersonating a client, after executing an apc. this is unexpected, indicating that the apc is missing a call to revert the impersonation."),
    PROCESS_IS_PROTECTED = (0xC0000712, "either the target process, or the target thread's containing process, is a protected process."),
    MCA_EXCEPTION = (0xC0000713, "a thread is getting dispatched with mca exception because of mca."),
    CERTIFICATE_MAPPING_NOT_UNIQUE = (0xC0000714, "the client certificate account mapping is not unique."),
    SYMLINK_CLASS_DISABLED = (0xC0000715, "the symbolic link cannot be followed because its type is disabled."),
    INVALID_IDN_NORMALIZATION = (0xC0000716, "indicates that the specified string is not valid for idn normalization."),
    NO_UNICODE_TRANSLATION = (0xC0000717, "no mapping for the unicode character exists in the target multi-byte code page."),
    ALREADY_REGISTERED = (0xC0000718, "the provided callback is already registered."),
    CONTEXT_MISMATCH = (0xC0000719, "the provided context did not match the target."),
    PORT_ALREADY_HAS_COMPLETION_LIST = (0xC000071A, "the specified port already has a completion list."),
    CALLBACK_RETURNED_THREAD_PRIORITY = (0xC000071B, "a threadpool worker thread entered a callback at thread base priority 0x%x and exited at priority 0x%x."),
    INVALID_THREAD = (0xC000071C, "an invalid thread, handle %p, is specified for this operation. possibly, a threadpool worker thread was specified."),
    CALLBACK_RETURNED_TRANSACTION = (0xC000071D, "a threadpool worker thread entered a callback, which left transaction state."),
    CALLBACK_RETURNED_LDR_LOCK = (0xC000071E, "a threadpool worker thread entered a callback, which left the loader lock held."),
    CALLBACK_RETURNED_LANG = (0xC000071F, "a threadpool worker thread entered a callback, which left with preferred languages set."),
    CALLBACK_RETURNED_PRI_BACK = (0xC0000720, "a threadpool worker thread entered a callback, which left with background priorities set."),
    DISK_REPAIR_DISABLED = (0xC0000800, "the attempted operation required self healing to be enabled."),
    DS_DOMAIN_RENAME_IN_PROGRESS = (0xC0000801, "the directory service cannot perform the requested operation because a domain rename operation is in progress."),
    DISK_QUOTA_EXCEEDED = (0xC0000802, "an operation failed because the storage quota was exceeded."),
    CONTENT_BLOCKED = (0xC0000804, "an operation failed because the content was blocked."),
    BAD_CLUSTERS = (0xC0000805, "the operation could not be completed due to bad clusters on disk."),
    VOLUME_DIRTY = (0xC0000806, "the operation could not be completed because the volume is dirty. please run the chkdsk utility and try again."),
    FILE_CHECKED_OUT = (0xC0000901, "this file is checked out or locked for editing by another user."),
    CHECKOUT_REQUIRED = (0xC0000902, "the file must be checked out before saving changes."),
    BAD_FILE_TYPE = (0xC0000903, "the file type being saved or retrieved has been blocked."),
    FILE_TOO_LARGE = (0xC0000904, "the file size exceeds the limit allowed and cannot be saved."),
    FORMS_AUTH_REQUIRED = (0xC0000905, "access denied. before opening files in this location, you must first browse to the web site and select the option to log on automatically."),
    VIRUS_INFECTED = (0xC0000906, "the operation did not complete successfully because the file contains a virus."),
    VIRUS_DELETED = (0xC0000907, "this file contains a virus and cannot be opened. due to the nature of this virus, the file has been removed from this location."),
    BAD_MCFG_TABLE = (0xC0000908, "the resources required for this device conflict with the mcfg table."),
    CANNOT_BREAK_OPLOCK = (0xC0000909, "the operation did not complete successfully because it would cause an oplock to be broken. the caller has requested that existing oplocks not be broken."),
    WOW_ASSERTION = (0xC0009898, "wow assertion error."),
    INVALID_SIGNATURE = (0xC000A000, "the cryptographic signature is invalid."),
    HMAC_NOT_SUPPORTED = (0xC000A001, "the cryptographic provider does not support hmac."),
    IPSEC_QUEUE_OVERFLOW = (0xC000A010, "the ipsec queue overflowed."),
    ND_QUEUE_OVERFLOW = (0xC000A011, "the neighbor discovery queue overflowed."),
    HOPLIMIT_EXCEEDED = (0xC000A012, "an internet control message protocol (icmp) hop limit exceeded error was received."),
    PROTOCOL_NOT_SUPPORTED = (0xC000A013, "the protocol is not installed on the local machine."),
    LOST_WRITEBEHIND_DATA_NETWORK_DISCONNECTED = (0xC000A080, "{delayed write failed} windows was unable to save all the data for the file %hs; the data has been lost. this error may be caused by network connectivity issues. try to save this file elsewhere."),
    LOST_WRITEBEHIND_DATA_NETWORK_SERVER_ERROR = (0xC000A081, "{delayed write failed} windows was unable to save all the data for the file %hs; the data has been lost. this error was returned by the server on which the file exists. try to save this file elsewhere."),
    LOST_WRITEBEHIND_DATA_LOCAL_DISK_ERROR = (0xC000A082, "{delayed write failed} windows was unable to save all the data for the file %hs; the data has been lost. this error may be caused if the device has been removed or the media is write-protected."),
    XML_PARSE_ERROR = (0xC000A083, "windows was unable to parse the requested xml data."),
    XMLDSIG_ERROR = (0xC000A084, "an error was encountered while processing an xml digital signature."),
    WRONG_COMPARTMENT = (0xC000A085, "this indicates that the caller made the connection request in the wrong routing compartment."),
    AUTHIP_FAILURE = (0xC000A086, "this indicates that there was an authip failure when attempting to connect to the remote host."),
    DS_OID_MAPPED_GROUP_CANT_HAVE_MEMBERS = (0xC000A087, "oid mapped groups cannot have members."),
    DS_OID_NOT_FOUND = (0xC000A088, "the specified oid cannot be found."),
    HASH_NOT_SUPPORTED = (0xC000A100, "hash generation for the specified version and hash type is not enabled on server."),
    HASH_NOT_PRESENT = (0xC000A101, "the hash requests is not present or not up to date with the current file contents."),
    OFFLOAD_READ_FLT_NOT_SUPPORTED = (0xC000A2A1, "a file system filter on the server has not opted in for offload read support."),
    OFFLOAD_WRITE_FLT_NOT_SUPPORTED = (0xC000A2A2, "a file system filter on the server has not opted in for offload write support."),
    OFFLOAD_READ_FILE_NOT_SUPPORTED = (0xC000A2A3, "offload read operations cannot be performed on: compressed files, sparse files, encrypted files, file system metadata files."),
    OFFLOAD_WRITE_FILE_NOT_SUPPORTED = (0xC000A2A4, "offload write operations cannot be performed on: compressed files, sparse files, encrypted files, file system metadata files."),

    // -------------------------------------------------------------------------
    // Error: debugger (facility 0x001)
    // -------------------------------------------------------------------------
    DBG_NO_STATE_CHANGE = (0xC0010001, "the debugger did not perform a state change."),
    DBG_APP_NOT_IDLE = (0xC0010002, "the debugger found that the application is not idle."),

    // -------------------------------------------------------------------------
    // Error: RPC runtime (facility 0x002) and RPC stubs (facility 0x003)
    // -------------------------------------------------------------------------
    RPC_NT_INVALID_STRING_BINDING = (0xC0020001, "the string binding is invalid."),
    RPC_NT_WRONG_KIND_OF_BINDING = (0xC0020002, "the binding handle is not the correct type."),
    RPC_NT_INVALID_BINDING = (0xC0020003, "the binding handle is invalid."),
    RPC_NT_PROTSEQ_NOT_SUPPORTED = (0xC0020004, "the rpc protocol sequence is not supported."),
    RPC_NT_INVALID_RPC_PROTSEQ = (0xC0020005, "the rpc protocol sequence is invalid."),
    RPC_NT_INVALID_STRING_UUID = (0xC0020006, "the string uuid is invalid."),
    RPC_NT_INVALID_ENDPOINT_FORMAT = (0xC0020007, "the endpoint format is invalid."),
    RPC_NT_INVALID_NET_ADDR = (0xC0020008, "the network address is invalid."),
    RPC_NT_NO_ENDPOINT_FOUND = (0xC0020009, "no endpoint was found."),
    RPC_NT_INVALID_TIMEOUT = (0xC002000A, "the time-out value is invalid."),
    RPC_NT_OBJECT_NOT_FOUND = (0xC002000B, "the object uuid was not found."),
    RPC_NT_ALREADY_REGISTERED = (0xC002000C, "the object uuid has already been registered."),
    RPC_NT_TYPE_ALREADY_REGISTERED = (0xC002000D, "the type uuid has already been registered."),
    RPC_NT_ALREADY_LISTENING = (0xC002000E, "the rpc server is already listening."),
    RPC_NT_NO_PROTSEQS_REGISTERED = (0xC002000F, "no protocol sequences have been registered."),
    RPC_NT_NOT_LISTENING = (0xC0020010, "the rpc server is not listening."),
    RPC_NT_UNKNOWN_MGR_TYPE = (0xC0020011, "the manager type is unknown."),
    RPC_NT_UNKNOWN_IF = (0xC0020012, "the interface is unknown."),
    RPC_NT_NO_BINDINGS = (0xC0020013, "there are no bindings."),
    RPC_NT_NO_PROTSEQS = (0xC0020014, "there are no protocol sequences."),
    RPC_NT_CANT_CREATE_ENDPOINT = (0xC0020015, "the endpoint cannot be created."),
    RPC_NT_OUT_OF_RESOURCES = (0xC0020016, "insufficient resources are available to complete this operation."),
    RPC_NT_SERVER_UNAVAILABLE = (0xC0020017, "the rpc server is unavailable."),
    RPC_NT_SERVER_TOO_BUSY = (0xC0020018, "the rpc server is too busy to complete this operation."),
    RPC_NT_INVALID_NETWORK_OPTIONS = (0xC0020019, "the network options are invalid."),
    RPC_NT_NO_CALL_ACTIVE = (0xC002001A, "no rpcs are active on this thread."),
    RPC_NT_CALL_FAILED = (0xC002001B, "the rpc failed."),
    RPC_NT_CALL_FAILED_DNE = (0xC002001C, "the rpc failed and did not execute."),
    RPC_NT_PROTOCOL_ERROR = (0xC002001D, "an rpc protocol error occurred."),
    RPC_NT_UNSUPPORTED_TRANS_SYN = (0xC002001F, "the rpc server does not support the transfer syntax."),
    RPC_NT_UNSUPPORTED_TYPE = (0xC0020021, "the type uuid is not supported."),
    RPC_NT_INVALID_TAG = (0xC0020022, "the tag is invalid."),
    RPC_NT_INVALID_BOUND = (0xC0020023, "the array bounds are invalid."),
    RPC_NT_NO_ENTRY_NAME = (0xC0020024, "the binding does not contain an entry name."),
    RPC_NT_INVALID_NAME_SYNTAX = (0xC0020025, "the name syntax is invalid."),
    RPC_NT_UNSUPPORTED_NAME_SYNTAX = (0xC0020026, "the name syntax is not supported."),
    RPC_NT_UUID_NO_ADDRESS = (0xC0020028, "no network address is available to construct a uuid."),
    RPC_NT_DUPLICATE_ENDPOINT = (0xC0020029, "the endpoint is a duplicate."),
    RPC_NT_UNKNOWN_AUTHN_TYPE = (0xC002002A, "the authentication type is unknown."),
    RPC_NT_MAX_CALLS_TOO_SMALL = (0xC002002B, "the maximum number of calls is too small."),
    RPC_NT_STRING_TOO_LONG = (0xC002002C, "the string is too long."),
    RPC_NT_PROTSEQ_NOT_FOUND = (0xC002002D, "the rpc protocol sequence was not found."),
    RPC_NT_PROCNUM_OUT_OF_RANGE = (0xC002002E, "the procedure number is out of range."),
    RPC_NT_BINDING_HAS_NO_AUTH = (0xC002002F, "the binding does not contain any authentication information."),
    RPC_NT_UNKNOWN_AUTHN_SERVICE = (0xC0020030, "the authentication service is unknown."),
    RPC_NT_UNKNOWN_AUTHN_LEVEL = (0xC0020031, "the authentication level is unknown."),
    RPC_NT_INVALID_AUTH_IDENTITY = (0xC0020032, "the security context is invalid."),
    RPC_NT_UNKNOWN_AUTHZ_SERVICE = (0xC0020033, "the authorization service is unknown."),
    EPT_NT_INVALID_ENTRY = (0xC0020034, "the entry is invalid."),
    EPT_NT_CANT_PERFORM_OP = (0xC0020035, "the operation cannot be performed."),
    EPT_NT_NOT_REGISTERED = (0xC0020036, "no more endpoints are available from the endpoint mapper."),
    RPC_NT_NOTHING_TO_EXPORT = (0xC0020037, "no interfaces have been exported."),
    RPC_NT_INCOMPLETE_NAME = (0xC0020038, "the entry name is incomplete."),
    RPC_NT_INVALID_VERS_OPTION = (0xC0020039, "the version option is invalid."),
    RPC_NT_NO_MORE_MEMBERS = (0xC002003A, "there are no more members."),
    RPC_NT_NOT_ALL_OBJS_UNEXPORTED = (0xC002003B, "there is nothing to unexport."),
    RPC_NT_INTERFACE_NOT_FOUND = (0xC002003C, "the interface was not found."),
    RPC_NT_ENTRY_ALREADY_EXISTS = (0xC002003D, "the entry already exists."),
    RPC_NT_ENTRY_NOT_FOUND = (0xC002003E, "the entry was not found."),
    RPC_NT_NAME_SERVICE_UNAVAILABLE = (0xC002003F, "the name service is unavailable."),
    RPC_NT_INVALID_NAF_ID = (0xC0020040, "the network address family is invalid."),
    RPC_NT_CANNOT_SUPPORT = (0xC0020041, "the requested operation is not supported."),
    RPC_NT_NO_CONTEXT_AVAILABLE = (0xC0020042, "no security context is available to allow impersonation."),
    RPC_NT_INTERNAL_ERROR = (0xC0020043, "an internal error occurred in the rpc."),
    RPC_NT_ZERO_DIVIDE = (0xC0020044, "the rpc server attempted to divide an integer by zero."),
    RPC_NT_ADDRESS_ERROR = (0xC0020045, "an addressing error occurred in the rpc server."),
    RPC_NT_FP_DIV_ZERO = (0xC0020046, "a floating point operation at the rpc server caused a divide by zero."),
    RPC_NT_FP_UNDERFLOW = (0xC0020047, "a floating point underflow occurred at the rpc server."),
    RPC_NT_FP_OVERFLOW = (0xC0020048, "a floating point overflow occurred at the rpc server."),
    RPC_NT_CALL_IN_PROGRESS = (0xC0020049, "an rpc is already in progress for this thread."),
    RPC_NT_NO_MORE_BINDINGS = (0xC002004A, "there are no more bindings."),
    RPC_NT_GROUP_MEMBER_NOT_FOUND = (0xC002004B, "the group member was not found."),
    EPT_NT_CANT_CREATE = (0xC002004C, "the endpoint mapper database entry could not be created."),
    RPC_NT_INVALID_OBJECT = (0xC002004D, "the object uuid is the nil uuid."),
    RPC_NT_NO_INTERFACES = (0xC002004F, "no interfaces have been registered."),
    RPC_NT_CALL_CANCELLED = (0xC0020050, "the rpc was canceled."),
    RPC_NT_BINDING_INCOMPLETE = (0xC0020051, "the binding handle does not contain all the required information."),
    RPC_NT_COMM_FAILURE = (0xC0020052, "a communications failure occurred during an rpc."),
    RPC_NT_UNSUPPORTED_AUTHN_LEVEL = (0xC0020053, "the requested authentication level is not supported."),
    RPC_NT_NO_PRINC_NAME = (0xC0020054, "no principal name was registered."),
    RPC_NT_NOT_RPC_ERROR = (0xC0020055, "the error specified is not a valid windows rpc error code."),
    RPC_NT_SEC_PKG_ERROR = (0xC0020057, "a security package-specific error occurred."),
    RPC_NT_NOT_CANCELLED = (0xC0020058, "the thread was not canceled."),
    RPC_NT_INVALID_ASYNC_HANDLE = (0xC0020062, "invalid asynchronous rpc handle."),
    RPC_NT_INVALID_ASYNC_CALL = (0xC0020063, "invalid asynchronous rpc call handle for this operation."),
    RPC_NT_PROXY_ACCESS_DENIED = (0xC0020064, "access to the http proxy is denied."),
    RPC_NT_NO_MORE_ENTRIES = (0xC0030001, "the list of rpc servers available for auto-handle binding has been exhausted."),
    RPC_NT_SS_CHAR_TRANS_OPEN_FAIL = (0xC0030002, "the file designated by dcerpcchartrans cannot be opened."),
    RPC_NT_SS_CHAR_TRANS_SHORT_FILE = (0xC0030003, "the file containing the character translation table has fewer than 512 bytes."),
    RPC_NT_SS_IN_NULL_CONTEXT = (0xC0030004, "a null context handle is passed as an [in] parameter."),
    RPC_NT_SS_CONTEXT_MISMATCH = (0xC0030005, "the context handle does not match any known context handles."),
    RPC_NT_SS_CONTEXT_DAMAGED = (0xC0030006, "the context handle changed during a call."),
    RPC_NT_SS_HANDLES_MISMATCH = (0xC0030007, "the binding handles passed to an rpc do not match."),
    RPC_NT_SS_CANNOT_GET_CALL_HANDLE = (0xC0030008, "the stub is unable to get the call handle."),
    RPC_NT_NULL_REF_POINTER = (0xC0030009, "a null reference pointer was passed to the stub."),
    RPC_NT_ENUM_VALUE_OUT_OF_RANGE = (0xC003000A, "the enumeration value is out of range."),
    RPC_NT_BYTE_COUNT_TOO_SMALL = (0xC003000B, "the byte count is too small."),
    RPC_NT_BAD_STUB_DATA = (0xC003000C, "the stub received bad data."),
    RPC_NT_INVALID_ES_ACTION = (0xC0030059, "invalid operation on the encoding/decoding handle."),
    RPC_NT_WRONG_ES_VERSION = (0xC003005A, "incompatible version of the serializing package."),
    RPC_NT_WRONG_STUB_VERSION = (0xC003005B, "incompatible version of the rpc stub."),
    RPC_NT_INVALID_PIPE_OBJECT = (0xC003005C, "the rpc pipe object is invalid or corrupt."),
    RPC_NT_INVALID_PIPE_OPERATION = (0xC003005D, "an invalid operation was attempted on an rpc pipe object."),
    RPC_NT_WRONG_PIPE_VERSION = (0xC003005E, "unsupported rpc pipe version."),
    RPC_NT_PIPE_CLOSED = (0xC003005F, "the rpc pipe object has already been closed."),
    RPC_NT_PIPE_DISCIPLINE_ERROR = (0xC0030060, "the rpc call completed before all pipes were processed."),
    RPC_NT_PIPE_EMPTY = (0xC0030061, "no more data is available from the rpc pipe."),
    IO_REISSUE_AS_CACHED = (0xC0040039, "reissue the given operation as a cached i/o operation."),

    // -------------------------------------------------------------------------
    // Error: terminal server (facility 0x00A)
    // -------------------------------------------------------------------------
    CTX_WINSTATION_NAME_INVALID = (0xC00A0001, "the session name %1 is invalid."),
    CTX_INVALID_PD = (0xC00A0002, "the protocol driver %1 is invalid."),
    CTX_PD_NOT_FOUND = (0xC00A0003, "the protocol driver %1 was not found in the system path."),
    CTX_CLOSE_PENDING = (0xC00A0006, "a close operation is pending on the terminal connection."),
    CTX_NO_OUTBUF = (0xC00A0007, "no free output buffers are available."),
    CTX_MODEM_INF_NOT_FOUND = (0xC00A0008, "the modem.inf file was not found."),
    CTX_INVALID_MODEMNAME = (0xC00A0009, "the modem (%1) was not found in the modem.inf file."),
    CTX_RESPONSE_ERROR = (0xC00A000A, "the modem did not accept the command sent to it. verify that the configured modem name matches the attached modem."),
    CTX_MODEM_RESPONSE_TIMEOUT = (0xC00A000B, "the modem did not respond to the command sent to it. verify that the modem cable is properly attached and the modem is turned on."),
    CTX_MODEM_RESPONSE_NO_CARRIER = (0xC00A000C, "carrier detection has failed or the carrier has been dropped due to disconnection."),
    CTX_MODEM_RESPONSE_NO_DIALTONE = (0xC00A000D, "a dial tone was not detected within the required time. verify that the phone cable is properly attached and functional."),
    CTX_MODEM_RESPONSE_BUSY = (0xC00A000E, "a busy signal was detected at a remote site on callback."),
    CTX_MODEM_RESPONSE_VOICE = (0xC00A000F, "a voice was detected at a remote site on callback."),
    CTX_TD_ERROR = (0xC00A0010, "transport driver error."),
    CTX_LICENSE_CLIENT_INVALID = (0xC00A0012, "the client you are using is not licensed to use this system. your logon request is denied."),
    CTX_LICENSE_NOT_AVAILABLE = (0xC00A0013, "the system has reached its licensed logon limit. try again later."),
    CTX_LICENSE_EXPIRED = (0xC00A0014, "the system license has expired. your logon request is denied."),
    CTX_WINSTATION_NOT_FOUND = (0xC00A0015, "the specified session cannot be found."),
    CTX_WINSTATION_NAME_COLLISION = (0xC00A0016, "the specified session name is already in use."),
    CTX_WINSTATION_BUSY = (0xC00A0017, "the requested operation cannot be completed because the terminal connection is currently processing a connect, disconnect, reset, or delete operation."),
    CTX_BAD_VIDEO_MODE = (0xC00A0018, "an attempt has been made to connect to a session whose video mode is not supported by the current client."),
    CTX_GRAPHICS_INVALID = (0xC00A0022, "the application attempted to enable dos graphics mode. dos graphics mode is not supported."),
    CTX_NOT_CONSOLE = (0xC00A0024, "the requested operation can be performed only on the system console. this is most often the result of a driver or system dll requiring direct console access."),
    CTX_CLIENT_QUERY_TIMEOUT = (0xC00A0026, "the client failed to respond to the server connect message."),
    CTX_CONSOLE_DISCONNECT = (0xC00A0027, "disconnecting the console session is not supported."),
    CTX_CONSOLE_CONNECT = (0xC00A0028, "reconnecting a disconnected session to the console is not supported."),
    CTX_SHADOW_DENIED = (0xC00A002A, "the request to control another session remotely was denied."),
    CTX_WINSTATION_ACCESS_DENIED = (0xC00A002B, "a process has requested access to a session, but has not been granted those access rights."),
    CTX_INVALID_WD = (0xC00A002E, "the terminal connection driver %1 is invalid."),
    CTX_WD_NOT_FOUND = (0xC00A002F, "the terminal connection driver %1 was not found in the system path."),
    CTX_SHADOW_INVALID = (0xC00A0030, "the requested session cannot be controlled remotely. you cannot control your own session, a session that is trying to control your session, a session that has no user logged on, or other sessions from the console."),
    CTX_SHADOW_DISABLED = (0xC00A0031, "the requested session is not configured to allow remote control."),
    RDP_PROTOCOL_ERROR = (0xC00A0032, "the rdp protocol component %2 detected an error in the protocol stream and has disconnected the client."),
    CTX_CLIENT_LICENSE_NOT_SET = (0xC00A0033, "your request to connect to this terminal server has been rejected. your terminal server client license number has not been entered for this copy of the terminal client. contact your system administrator for help in entering a valid, unique license number for this terminal server client. click ok to continue."),
    CTX_CLIENT_LICENSE_IN_USE = (0xC00A0034, "your request to connect to this terminal server has been rejected. your terminal server client license number is currently being used by another user. contact your system administrator to obtain a new copy of the terminal server client with a valid, unique license number. click ok to continue."),
    CTX_SHADOW_ENDED_BY_MODE_CHANGE = (0xC00A0035, "the remote control of the console was terminated because the display mode was changed. changing the display mode in a remote control session is not supported."),
    CTX_SHADOW_NOT_RUNNING = (0xC00A0036, "remote control could not be terminated because the specified session is not currently being remotely controlled."),
    CTX_LOGON_DISABLED = (0xC00A0037, "your interactive logon privilege has been disabled. contact your system administrator."),
    CTX_SECURITY_LAYER_ERROR = (0xC00A0038, "the terminal server security layer detected an error in the protocol stream and has disconnected the client."),
    TS_INCOMPATIBLE_SESSIONS = (0xC00A0039, "the target session is incompatible with the current session."),

    // -------------------------------------------------------------------------
    // Error: cluster (facility 0x013)
    // -------------------------------------------------------------------------
    CLUSTER_INVALID_NODE = (0xC0130001, "the cluster node is not valid."),
    CLUSTER_NODE_EXISTS = (0xC0130002, "the cluster node already exists."),
    CLUSTER_JOIN_IN_PROGRESS = (0xC0130003, "a node is in the process of joining the cluster."),
    CLUSTER_NODE_NOT_FOUND = (0xC0130004, "the cluster node was not found."),
    CLUSTER_LOCAL_NODE_NOT_FOUND = (0xC0130005, "the cluster local node information was not found."),
    CLUSTER_NETWORK_EXISTS = (0xC0130006, "the cluster network already exists."),
    CLUSTER_NETWORK_NOT_FOUND = (0xC0130007, "the cluster network was not found."),
    CLUSTER_NETINTERFACE_EXISTS = (0xC0130008, "the cluster network interface already exists."),
    CLUSTER_NETINTERFACE_NOT_FOUND = (0xC0130009, "the cluster network interface was not found."),
    CLUSTER_INVALID_REQUEST = (0xC013000A, "the cluster request is not valid for this object."),
    CLUSTER_INVALID_NETWORK_PROVIDER = (0xC013000B, "the cluster network provider is not valid."),
    CLUSTER_NODE_DOWN = (0xC013000C, "the cluster node is down."),
    CLUSTER_NODE_UNREACHABLE = (0xC013000D, "the cluster node is not reachable."),
    CLUSTER_NODE_NOT_MEMBER = (0xC013000E, "the cluster node is not a member of the cluster."),
    CLUSTER_JOIN_NOT_IN_PROGRESS = (0xC013000F, "a cluster join operation is not in progress."),
    CLUSTER_INVALID_NETWORK = (0xC0130010, "the cluster network is not valid."),
    CLUSTER_NO_NET_ADAPTERS = (0xC0130011, "no network adapters are available."),
    CLUSTER_NODE_UP = (0xC0130012, "the cluster node is up."),
    CLUSTER_NODE_PAUSED = (0xC0130013, "the cluster node is paused."),
    CLUSTER_NODE_NOT_PAUSED = (0xC0130014, "the cluster node is not paused."),
    CLUSTER_NO_SECURITY_CONTEXT = (0xC0130015, "no cluster security context is available."),
    CLUSTER_NETWORK_NOT_INTERNAL = (0xC0130016, "the cluster network is not configured for internal cluster communication."),
    CLUSTER_POISONED = (0xC0130017, "the cluster node has been poisoned."),

    // -------------------------------------------------------------------------
    // Error: ACPI (facility 0x014)
    // -------------------------------------------------------------------------
    ACPI_INVALID_OPCODE = (0xC0140001, "an attempt was made to run an invalid aml opcode."),
    ACPI_STACK_OVERFLOW = (0xC0140002, "the aml interpreter stack has overflowed."),
    ACPI_ASSERT_FAILED = (0xC0140003, "an inconsistent state has occurred."),
    ACPI_INVALID_INDEX = (0xC0140004, "an attempt was made to access an array outside its bounds."),
    ACPI_INVALID_ARGUMENT = (0xC0140005, "a required argument was not specified."),
    ACPI_FATAL = (0xC0140006, "a fatal error has occurred."),
    ACPI_INVALID_SUPERNAME = (0xC0140007, "an invalid supername was specified."),
    ACPI_INVALID_ARGTYPE = (0xC0140008, "an argument with an incorrect type was specified."),
    ACPI_INVALID_OBJTYPE = (0xC0140009, "an object with an incorrect type was specified."),
    ACPI_INVALID_TARGETTYPE = (0xC014000A, "a target with an incorrect type was specified."),
    ACPI_INCORRECT_ARGUMENT_COUNT = (0xC014000B, "an incorrect number of arguments was specified."),
    ACPI_ADDRESS_NOT_MAPPED = (0xC014000C, "an address failed to translate."),
    ACPI_INVALID_EVENTTYPE = (0xC014000D, "an incorrect event type was specified."),
    ACPI_HANDLER_COLLISION = (0xC014000E, "a handler for the target already exists."),
    ACPI_INVALID_DATA = (0xC014000F, "invalid data for the target was specified."),
    ACPI_INVALID_REGION = (0xC0140010, "an invalid region for the target was specified."),
    ACPI_INVALID_ACCESS_SIZE = (0xC0140011, "an attempt was made to access a field outside the defined range."),
    ACPI_ACQUIRE_GLOBAL_LOCK = (0xC0140012, "the global system lock could not be acquired."),
    ACPI_ALREADY_INITIALIZED = (0xC0140013, "an attempt was made to reinitialize the acpi subsystem."),
    ACPI_NOT_INITIALIZED = (0xC0140014, "the acpi subsystem has not been initialized."),
    ACPI_INVALID_MUTEX_LEVEL = (0xC0140015, "an incorrect mutex was specified."),
    ACPI_MUTEX_NOT_OWNED = (0xC0140016, "the mutex is not currently owned."),
    ACPI_MUTEX_NOT_OWNER = (0xC0140017, "an attempt was made to access the mutex by a process that was not the owner."),
    ACPI_RS_ACCESS = (0xC0140018, "an error occurred during an access to region space."),
    ACPI_INVALID_TABLE = (0xC0140019, "an attempt was made to use an incorrect table."),
    ACPI_REG_HANDLER_FAILED = (0xC0140020, "the registration of an acpi event failed."),
    ACPI_POWER_REQUEST_FAILED = (0xC0140021, "an acpi power object failed to transition state."),

    // -------------------------------------------------------------------------
    // Error: side-by-side (facility 0x015)
    // -------------------------------------------------------------------------
    SXS_SECTION_NOT_FOUND = (0xC0150001, "the requested section is not present in the activation context."),
    SXS_CANT_GEN_ACTCTX = (0xC0150002, "windows was unble to process the application binding information. refer to the system event log for further information."),
    SXS_INVALID_ACTCTXDATA_FORMAT = (0xC0150003, "the application binding data format is invalid."),
    SXS_ASSEMBLY_NOT_FOUND = (0xC0150004, "the referenced assembly is not installed on the system."),
    SXS_MANIFEST_FORMAT_ERROR = (0xC0150005, "the manifest file does not begin with the required tag and format information."),
    SXS_MANIFEST_PARSE_ERROR = (0xC0150006, "the manifest file contains one or more syntax errors."),
    SXS_ACTIVATION_CONTEXT_DISABLED = (0xC0150007, "the application attempted to activate a disabled activation context."),
    SXS_KEY_NOT_FOUND = (0xC0150008, "the requested lookup key was not found in any active activation context."),
    SXS_VERSION_CONFLICT = (0xC0150009, "a component version required by the application conflicts with another component version that is already active."),
    SXS_WRONG_SECTION_TYPE = (0xC015000A, "the type requested activation context section does not match the query api used."),
    SXS_THREAD_QUERIES_DISABLED = (0xC015000B, "lack of system resources has required isolated activation to be disabled for the current thread of execution."),
    SXS_ASSEMBLY_MISSING = (0xC015000C, "the referenced assembly could not be found."),
    SXS_PROCESS_DEFAULT_ALREADY_SET = (0xC015000E, "an attempt to set the process default activation context failed because the process default activation context was already set."),
    SXS_EARLY_DEACTIVATION = (0xC015000F, "the activation context being deactivated is not the most recently activated one."),
    SXS_INVALID_DEACTIVATION = (0xC0150010, "the activation context being deactivated is not active for the current thread of execution."),
    SXS_MULTIPLE_DEACTIVATION = (0xC0150011, "the activation context being deactivated has already been deactivated."),
    SXS_SYSTEM_DEFAULT_ACTIVATION_CONTEXT_EMPTY = (0xC0150012, "the activation context of the system default assembly could not be generated."),
    SXS_PROCESS_TERMINATION_REQUESTED = (0xC0150013, "a component used by the isolation facility has requested that the process be terminated."),
    SXS_CORRUPT_ACTIVATION_STACK = (0xC0150014, "the activation context activation stack for the running thread of execution is corrupt."),
    SXS_CORRUPTION = (0xC0150015, "the application isolation metadata for this process or thread has become corrupt."),
    SXS_INVALID_IDENTITY_ATTRIBUTE_VALUE = (0xC0150016, "the value of an attribute in an identity is not within the legal range."),
    SXS_INVALID_IDENTITY_ATTRIBUTE_NAME = (0xC0150017, "the name of an attribute in an identity is not within the legal range."),
    SXS_IDENTITY_DUPLICATE_ATTRIBUTE = (0xC0150018, "an identity contains two definitions for the same attribute."),
    SXS_IDENTITY_PARSE_ERROR = (0xC0150019, "the identity string is malformed. this may be due to a trailing comma, more than two unnamed attributes, a missing attribute name, or a missing attribute value."),
    SXS_COMPONENT_STORE_CORRUPT = (0xC015001A, "the component store has become corrupted."),
    SXS_FILE_HASH_MISMATCH = (0xC015001B, "a component's file does not match the verification information present in the component manifest."),
    SXS_MANIFEST_IDENTITY_SAME_BUT_CONTENTS_DIFFERENT = (0xC015001C, "the identities of the manifests are identical, but their contents are different."),
    SXS_IDENTITIES_DIFFERENT = (0xC015001D, "the component identities are different."),
    SXS_ASSEMBLY_IS_NOT_A_DEPLOYMENT = (0xC015001E, "the assembly is not a deployment."),
    SXS_FILE_NOT_PART_OF_ASSEMBLY = (0xC015001F, "the file is not a part of the assembly."),
    ADVANCED_INSTALLER_FAILED = (0xC0150020, "an advanced installer failed during setup or servicing."),
    XML_ENCODING_MISMATCH = (0xC0150021, "the character encoding in the xml declaration did not match the encoding used in the document."),
    SXS_MANIFEST_TOO_BIG = (0xC0150022, "the size of the manifest exceeds the maximum allowed."),
    SXS_SETTING_NOT_REGISTERED = (0xC0150023, "the setting is not registered."),
    SXS_TRANSACTION_CLOSURE_INCOMPLETE = (0xC0150024, "one or more required transaction members are not present."),
    SMI_PRIMITIVE_INSTALLER_FAILED = (0xC0150025, "the smi primitive installer failed during setup or servicing."),
    GENERIC_COMMAND_FAILED = (0xC0150026, "a generic command executable returned a result that indicates failure."),
    SXS_FILE_HASH_MISSING = (0xC0150027, "a component is missing file verification information in its manifest."),

    // -------------------------------------------------------------------------
    // Error: kernel transaction manager (facility 0x019)
    // -------------------------------------------------------------------------
    TRANSACTIONAL_CONFLICT = (0xC0190001, "the function attempted to use a name that is reserved for use by another transaction."),
    INVALID_TRANSACTION = (0xC0190002, "the transaction handle associated with this operation is invalid."),
    TRANSACTION_NOT_ACTIVE = (0xC0190003, "the requested operation was made in the context of a transaction that is no longer active."),
    TM_INITIALIZATION_FAILED = (0xC0190004, "the transaction manager was unable to be successfully initialized. transacted operations are not supported."),
    RM_NOT_ACTIVE = (0xC0190005, "transaction support within the specified file system resource manager was not started or was shut down due to an error."),
    RM_METADATA_CORRUPT = (0xC0190006, "the metadata of the resource manager has been corrupted. the resource manager will not function."),
    TRANSACTION_NOT_JOINED = (0xC0190007, "the resource manager attempted to prepare a transaction that it has not successfully joined."),
    DIRECTORY_NOT_RM = (0xC0190008, "the specified directory does not contain a file system resource manager."),
    TRANSACTIONS_UNSUPPORTED_REMOTE = (0xC019000A, "the remote server or share does not support transacted file operations."),
    LOG_RESIZE_INVALID_SIZE = (0xC019000B, "the requested log size for the file system resource manager is invalid."),
    REMOTE_FILE_VERSION_MISMATCH = (0xC019000C, "the remote server sent mismatching version number or fid for a file opened with transactions."),
    CRM_PROTOCOL_ALREADY_EXISTS = (0xC019000F, "the resource manager tried to register a protocol that already exists."),
    TRANSACTION_PROPAGATION_FAILED = (0xC0190010, "the attempt to propagate the transaction failed."),
    CRM_PROTOCOL_NOT_FOUND = (0xC0190011, "the requested propagation protocol was not registered as a crm."),
    TRANSACTION_SUPERIOR_EXISTS = (0xC0190012, "the transaction object already has a superior enlistment, and the caller attempted an operation that would have created a new superior. only a single superior enlistment is allowed."),
    TRANSACTION_REQUEST_NOT_VALID = (0xC0190013, "the requested operation is not valid on the transaction object in its current state."),
    TRANSACTION_NOT_REQUESTED = (0xC0190014, "the caller has called a response api, but the response is not expected because the transaction manager did not issue the corresponding request to the caller."),
    TRANSACTION_ALREADY_ABORTED = (0xC0190015, "it is too late to perform the requested operation, because the transaction has already been aborted."),
    TRANSACTION_ALREADY_COMMITTED = (0xC0190016, "it is too late to perform the requested operation, because the transaction has already been committed."),
    TRANSACTION_INVALID_MARSHALL_BUFFER = (0xC0190017, "the buffer passed in to ntpushtransaction or ntpulltransaction is not in a valid format."),
    CURRENT_TRANSACTION_NOT_VALID = (0xC0190018, "the current transaction context associated with the thread is not a valid handle to a transaction object."),
    LOG_GROWTH_FAILED = (0xC0190019, "an attempt to create space in the transactional resource manager's log failed. the failure status has been recorded in the event log."),
    OBJECT_NO_LONGER_EXISTS = (0xC0190021, "the object (file, stream, or link) that corresponds to the handle has been deleted by a transaction savepoint rollback."),
    STREAM_MINIVERSION_NOT_FOUND = (0xC0190022, "the specified file miniversion was not found for this transacted file open."),
    STREAM_MINIVERSION_NOT_VALID = (0xC0190023, "the specified file miniversion was found but has been invalidated. the most likely cause is a transaction savepoint rollback."),
    MINIVERSION_INACCESSIBLE_FROM_SPECIFIED_TRANSACTION = (0xC0190024, "a miniversion may be opened only in the context of the transaction that created it."),
    CANT_OPEN_MINIVERSION_WITH_MODIFY_INTENT = (0xC0190025, "it is not possible to open a miniversion with modify access."),
    CANT_CREATE_MORE_STREAM_MINIVERSIONS = (0xC0190026, "it is not possible to create any more miniversions for this stream."),
    HANDLE_NO_LONGER_VALID = (0xC0190028, "the handle has been invalidated by a transaction. the most likely cause is the presence of memory mapping on a file or an open handle when the transaction ended or rolled back to savepoint."),
    LOG_CORRUPTION_DETECTED = (0xC0190030, "the log data is corrupt."),
    RM_DISCONNECTED = (0xC0190032, "the transaction outcome is unavailable because the resource manager responsible for it is disconnected."),
    ENLISTMENT_NOT_SUPERIOR = (0xC0190033, "the request was rejected because the enlistment in question is not a superior enlistment."),
    FILE_IDENTITY_NOT_PERSISTENT = (0xC0190036, "the file cannot be opened in a transaction because its identity depends on the outcome of an unresolved transaction."),
    CANT_BREAK_TRANSACTIONAL_DEPENDENCY = (0xC0190037, "the operation cannot be performed because another transaction is depending on this property not changing."),
    CANT_CROSS_RM_BOUNDARY = (0xC0190038, "the operation would involve a single file with two transactional resource managers and is, therefore, not allowed."),
    TXF_DIR_NOT_EMPTY = (0xC0190039, "the $txf directory must be empty for this operation to succeed."),
    INDOUBT_TRANSACTIONS_EXIST = (0xC019003A, "the operation would leave a transactional resource manager in an inconsistent state and is therefore not allowed."),
    TM_VOLATILE = (0xC019003B, "the operation could not be completed because the transaction manager does not have a log."),
    ROLLBACK_TIMER_EXPIRED = (0xC019003C, "a rollback could not be scheduled because a previously scheduled rollback has already executed or been queued for execution."),
    TXF_ATTRIBUTE_CORRUPT = (0xC019003D, "the transactional metadata attribute on the file or directory %hs is corrupt and unreadable."),
    EFS_NOT_ALLOWED_IN_TRANSACTION = (0xC019003E, "the encryption operation could not be completed because a transaction is active."),
    TRANSACTIONAL_OPEN_NOT_ALLOWED = (0xC019003F, "this object is not allowed to be opened in a transaction."),
    TRANSACTED_MAPPING_UNSUPPORTED_REMOTE = (0xC0190040, "memory mapping (creating a mapped section) a remote file under a transaction is not supported."),
    TRANSACTION_REQUIRED_PROMOTION = (0xC0190043, "promotion was required to allow the resource manager to enlist, but the transaction was set to disallow it."),
    CANNOT_EXECUTE_FILE_IN_TRANSACTION = (0xC0190044, "this file is open for modification in an unresolved transaction and can be opened for execute only by a transacted reader."),
    TRANSACTIONS_NOT_FROZEN = (0xC0190045, "the request to thaw frozen transactions was ignored because transactions were not previously frozen."),
    TRANSACTION_FREEZE_IN_PROGRESS = (0xC0190046, "transactions cannot be frozen because a freeze is already in progress."),
    NOT_SNAPSHOT_VOLUME = (0xC0190047, "the target volume is not a snapshot volume. this operation is valid only on a volume mounted as a snapshot."),
    NO_SAVEPOINT_WITH_OPEN_FILES = (0xC0190048, "the savepoint operation failed because files are open on the transaction, which is not permitted."),
    SPARSE_NOT_ALLOWED_IN_TRANSACTION = (0xC0190049, "the sparse operation could not be completed because a transaction is active on the file."),
    TM_IDENTITY_MISMATCH = (0xC019004A, "the call to create a transaction manager object failed because the tm identity that is stored in the log file does not match the tm identity that was passed in as an argument."),
    FLOATED_SECTION = (0xC019004B, "i/o was attempted on a section object that has been floated as a result of a transaction ending. there is no valid data."),
    CANNOT_ACCEPT_TRANSACTED_WORK = (0xC019004C, "the transactional resource manager cannot currently accept transacted work due to a transient condition, such as low resources."),
    CANNOT_ABORT_TRANSACTIONS = (0xC019004D, "the transactional resource manager had too many transactions outstanding that could not be aborted. the transactional resource manager has been shut down."),
    TRANSACTION_NOT_FOUND = (0xC019004E, "the specified transaction was unable to be opened because it was not found."),
    RESOURCEMANAGER_NOT_FOUND = (0xC019004F, "the specified resource manager was unable to be opened because it was not found."),
    ENLISTMENT_NOT_FOUND = (0xC0190050, "the specified enlistment was unable to be opened because it was not found."),
    TRANSACTIONMANAGER_NOT_FOUND = (0xC0190051, "the specified transaction manager was unable to be opened because it was not found."),
    TRANSACTIONMANAGER_NOT_ONLINE = (0xC0190052, "the specified resource manager was unable to create an enlistment because its associated transaction manager is not online."),
    TRANSACTIONMANAGER_RECOVERY_NAME_COLLISION = (0xC0190053, "the specified transaction manager was unable to create the objects contained in its log file in the ob namespace. therefore, the transaction manager was unable to recover."),
    TRANSACTION_NOT_ROOT = (0xC0190054, "the call to create a superior enlistment on this transaction object could not be completed because the transaction object specified for the enlistment is a subordinate branch of the transaction. only the root of the transaction can be enlisted as a superior."),
    TRANSACTION_OBJECT_EXPIRED = (0xC0190055, "because the associated transaction manager or resource manager has been closed, the handle is no longer valid."),
    COMPRESSION_NOT_ALLOWED_IN_TRANSACTION = (0xC0190056, "the compression operation could not be completed because a transaction is active on the file."),
    TRANSACTION_RESPONSE_NOT_ENLISTED = (0xC0190057, "the specified operation could not be performed on this superior enlistment because the enlistment was not created with the corresponding completion response in the notificationmask."),
    TRANSACTION_RECORD_TOO_LONG = (0xC0190058, "the specified operation could not be performed because the record to be logged was too long. this can occur because either there are too many enlistments on this transaction or the combined recoveryinformation being logged on behalf of those enlistments is too long."),
    NO_LINK_TRACKING_IN_TRANSACTION = (0xC0190059, "the link-tracking operation could not be completed because a transaction is active."),
    OPERATION_NOT_SUPPORTED_IN_TRANSACTION = (0xC019005A, "this operation cannot be performed in a transaction."),
    TRANSACTION_INTEGRITY_VIOLATED = (0xC019005B, "the kernel transaction manager had to abort or forget the transaction because it blocked forward progress."),
    EXPIRED_HANDLE = (0xC0190060, "the handle is no longer properly associated with its transaction. it may have been opened in a transactional resource manager that was subsequently forced to restart. please close the handle and open a new one."),
    TRANSACTION_NOT_ENLISTED = (0xC0190061, "the specified operation could not be performed because the resource manager is not enlisted in the transaction."),

    // -------------------------------------------------------------------------
    // Error: common log file system (facility 0x01A)
    // -------------------------------------------------------------------------
    LOG_SECTOR_INVALID = (0xC01A0001, "the log service found an invalid log sector."),
    LOG_SECTOR_PARITY_INVALID = (0xC01A0002, "the log service encountered a log sector with invalid block parity."),
    LOG_SECTOR_REMAPPED = (0xC01A0003, "the log service encountered a remapped log sector."),
    LOG_BLOCK_INCOMPLETE = (0xC01A0004, "the log service encountered a partial or incomplete log block."),
    LOG_INVALID_RANGE = (0xC01A0005, "the log service encountered an attempt to access data outside the active log range."),
    LOG_BLOCKS_EXHAUSTED = (0xC01A0006, "the log service user-log marshaling buffers are exhausted."),
    LOG_READ_CONTEXT_INVALID = (0xC01A0007, "the log service encountered an attempt to read from a marshaling area with an invalid read context."),
    LOG_RESTART_INVALID = (0xC01A0008, "the log service encountered an invalid log restart area."),
    LOG_BLOCK_VERSION = (0xC01A0009, "the log service encountered an invalid log block version."),
    LOG_BLOCK_INVALID = (0xC01A000A, "the log service encountered an invalid log block."),
    LOG_READ_MODE_INVALID = (0xC01A000B, "the log service encountered an attempt to read the log with an invalid read mode."),
    LOG_METADATA_CORRUPT = (0xC01A000D, "the log service encountered a corrupted metadata file."),
    LOG_METADATA_INVALID = (0xC01A000E, "the log service encountered a metadata file that could not be created by the log file system."),
    LOG_METADATA_INCONSISTENT = (0xC01A000F, "the log service encountered a metadata file with inconsistent data."),
    LOG_RESERVATION_INVALID = (0xC01A0010, "the log service encountered an attempt to erroneously allocate or dispose reservation space."),
    LOG_CANT_DELETE = (0xC01A0011, "the log service cannot delete the log file or the file system container."),
    LOG_CONTAINER_LIMIT_EXCEEDED = (0xC01A0012, "the log service has reached the maximum allowable containers allocated to a log file."),
    LOG_START_OF_LOG = (0xC01A0013, "the log service has attempted to read or write backward past the start of the log."),
    LOG_POLICY_ALREADY_INSTALLED = (0xC01A0014, "the log policy could not be installed because a policy of the same type is already present."),
    LOG_POLICY_NOT_INSTALLED = (0xC01A0015, "the log policy in question was not installed at the time of the request."),
    LOG_POLICY_INVALID = (0xC01A0016, "the installed set of policies on the log is invalid."),
    LOG_POLICY_CONFLICT = (0xC01A0017, "a policy on the log in question prevented the operation from completing."),
    LOG_PINNED_ARCHIVE_TAIL = (0xC01A0018, "the log space cannot be reclaimed because the log is pinned by the archive tail."),
    LOG_RECORD_NONEXISTENT = (0xC01A0019, "the log record is not a record in the log file."),
    LOG_RECORDS_RESERVED_INVALID = (0xC01A001A, "the number of reserved log records or the adjustment of the number of reserved log records is invalid."),
    LOG_SPACE_RESERVED_INVALID = (0xC01A001B, "the reserved log space or the adjustment of the log space is invalid."),
    LOG_TAIL_INVALID = (0xC01A001C, "a new or existing archive tail or the base of the active log is invalid."),
    LOG_FULL = (0xC01A001D, "the log space is exhausted."),
    LOG_MULTIPLEXED = (0xC01A001E, "the log is multiplexed; no direct writes to the physical log are allowed."),
    LOG_DEDICATED = (0xC01A001F, "the operation failed because the log is dedicated."),
    LOG_ARCHIVE_NOT_IN_PROGRESS = (0xC01A0020, "the operation requires an archive context."),
    LOG_ARCHIVE_IN_PROGRESS = (0xC01A0021, "log archival is in progress."),
    LOG_EPHEMERAL = (0xC01A0022, "the operation requires a nonephemeral log, but the log is ephemeral."),
    LOG_NOT_ENOUGH_CONTAINERS = (0xC01A0023, "the log must have at least two containers before it can be read from or written to."),
    LOG_CLIENT_ALREADY_REGISTERED = (0xC01A0024, "a log client has already registered on the stream."),
    LOG_CLIENT_NOT_REGISTERED = (0xC01A0025, "a log client has not been registered on the stream."),
    LOG_FULL_HANDLER_IN_PROGRESS = (0xC01A0026, "a request has already been made to handle the log full condition."),
    LOG_CONTAINER_READ_FAILED = (0xC01A0027, "the log service encountered an error when attempting to read from a log container."),
    LOG_CONTAINER_WRITE_FAILED = (0xC01A0028, "the log service encountered an error when attempting to write to a log container."),
    LOG_CONTAINER_OPEN_FAILED = (0xC01A0029, "the log service encountered an error when attempting to open a log container."),
    LOG_CONTAINER_STATE_INVALID = (0xC01A002A, "the log service encountered an invalid container state when attempting a requested action."),
    LOG_STATE_INVALID = (0xC01A002B, "the log service is not in the correct state to perform a requested action."),
    LOG_PINNED = (0xC01A002C, "the log space cannot be reclaimed because the log is pinned."),
    LOG_METADATA_FLUSH_FAILED = (0xC01A002D, "the log metadata flush failed."),
    LOG_INCONSISTENT_SECURITY = (0xC01A002E, "security on the log and its containers is inconsistent."),
    LOG_APPENDED_FLUSH_FAILED = (0xC01A002F, "records were appended to the log or reservation changes were made, but the log could not be flushed."),
    LOG_PINNED_RESERVATION = (0xC01A0030, "the log is pinned due to reservation consuming most of the log space. free some reserved records to make space available."),

    // -------------------------------------------------------------------------
    // Error: filter manager (facility 0x01C)
    // -------------------------------------------------------------------------
    FLT_NO_HANDLER_DEFINED = (0xC01C0001, "a handler was not defined by the filter for this operation."),
    FLT_CONTEXT_ALREADY_DEFINED = (0xC01C0002, "a context is already defined for this object."),
    FLT_INVALID_ASYNCHRONOUS_REQUEST = (0xC01C0003, "asynchronous requests are not valid for this operation."),
    FLT_DISALLOW_FAST_IO = (0xC01C0004, "this is an internal error code used by the filter manager to determine if a fast i/o operation should be forced down the input/output request packet (irp) path. minifilters should never return this value."),
    FLT_INVALID_NAME_REQUEST = (0xC01C0005, "an invalid name request was made. the name requested cannot be retrieved at this time."),
    FLT_NOT_SAFE_TO_POST_OPERATION = (0xC01C0006, "posting this operation to a worker thread for further processing is not safe at this time because it could lead to a system deadlock."),
    FLT_NOT_INITIALIZED = (0xC01C0007, "the filter manager was not initialized when a filter tried to register. make sure that the filter manager is loaded as a driver."),
    FLT_FILTER_NOT_READY = (0xC01C0008, "the filter is not ready for attachment to volumes because it has not finished initializing (fltstartfiltering has not been called)."),
    FLT_POST_OPERATION_CLEANUP = (0xC01C0009, "the filter must clean up any operation-specific context at this time because it is being removed from the system before the operation is completed by the lower drivers."),
    FLT_INTERNAL_ERROR = (0xC01C000A, "the filter manager had an internal error from which it cannot recover; therefore, the operation has failed. this is usually the result of a filter returning an invalid value from a pre-operation callback."),
    FLT_DELETING_OBJECT = (0xC01C000B, "the object specified for this action is in the process of being deleted; therefore, the action requested cannot be completed at this time."),
    FLT_MUST_BE_NONPAGED_POOL = (0xC01C000C, "a nonpaged pool must be used for this type of context."),
    FLT_DUPLICATE_ENTRY = (0xC01C000D, "a duplicate handler definition has been provided for an operation."),
    FLT_CBDQ_DISABLED = (0xC01C000E, "the callback data queue has been disabled."),
    FLT_DO_NOT_ATTACH = (0xC01C000F, "do not attach the filter to the volume at this time."),
    FLT_DO_NOT_DETACH = (0xC01C0010, "do not detach the filter from the volume at this time."),
    FLT_INSTANCE_ALTITUDE_COLLISION = (0xC01C0011, "an instance already exists at this altitude on the volume specified."),
    FLT_INSTANCE_NAME_COLLISION = (0xC01C0012, "an instance already exists with this name on the volume specified."),
    FLT_FILTER_NOT_FOUND = (0xC01C0013, "the system could not find the filter specified."),
    FLT_VOLUME_NOT_FOUND = (0xC01C0014, "the system could not find the volume specified."),
    FLT_INSTANCE_NOT_FOUND = (0xC01C0015, "the system could not find the instance specified."),
    FLT_CONTEXT_ALLOCATION_NOT_FOUND = (0xC01C0016, "no registered context allocation definition was found for the given request."),
    FLT_INVALID_CONTEXT_REGISTRATION = (0xC01C0017, "an invalid parameter was specified during context registration."),
    FLT_NAME_CACHE_MISS = (0xC01C0018, "the name requested was not found in the filter manager name cache and could not be retrieved from the file system."),
    FLT_NO_DEVICE_OBJECT = (0xC01C0019, "the requested device object does not exist for the given volume."),
    FLT_VOLUME_ALREADY_MOUNTED = (0xC01C001A, "the specified volume is already mounted."),
    FLT_ALREADY_ENLISTED = (0xC01C001B, "the specified transaction context is already enlisted in a transaction."),
    FLT_CONTEXT_ALREADY_LINKED = (0xC01C001C, "the specified context is already attached to another object."),
    FLT_NO_WAITER_FOR_REPLY = (0xC01C0020, "no waiter is present for the filter's reply to this message."),

    // -------------------------------------------------------------------------
    // Error: monitor (facility 0x01D)
    // -------------------------------------------------------------------------
    MONITOR_NO_DESCRIPTOR = (0xC01D0001, "a monitor descriptor could not be obtained."),
    MONITOR_UNKNOWN_DESCRIPTOR_FORMAT = (0xC01D0002, "this release does not support the format of the obtained monitor descriptor."),
    MONITOR_INVALID_DESCRIPTOR_CHECKSUM = (0xC01D0003, "the checksum of the obtained monitor descriptor is invalid."),
    MONITOR_INVALID_STANDARD_TIMING_BLOCK = (0xC01D0004, "the monitor descriptor contains an invalid standard timing block."),
    MONITOR_WMI_DATABLOCK_REGISTRATION_FAILED = (0xC01D0005, "wmi data-block registration failed for one of the msmonitorclass wmi subclasses."),
    MONITOR_INVALID_SERIAL_NUMBER_MONDSC_BLOCK = (0xC01D0006, "the provided monitor descriptor block is either corrupted or does not contain the monitor's detailed serial number."),
    MONITOR_INVALID_USER_FRIENDLY_MONDSC_BLOCK = (0xC01D0007, "the provided monitor descriptor block is either corrupted or does not contain the monitor's user-friendly name."),
    MONITOR_NO_MORE_DESCRIPTOR_DATA = (0xC01D0008, "there is no monitor descriptor data at the specified (offset or size) region."),
    MONITOR_INVALID_DETAILED_TIMING_BLOCK = (0xC01D0009, "the monitor descriptor contains an invalid detailed timing block."),
    MONITOR_INVALID_MANUFACTURE_DATE = (0xC01D000A, "monitor descriptor contains invalid manufacture date."),

    // -------------------------------------------------------------------------
    // Error: graphics (facility 0x01E)
    // -------------------------------------------------------------------------
    GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER = (0xC01E0000, "exclusive mode ownership is needed to create an unmanaged primary allocation."),
    GRAPHICS_INSUFFICIENT_DMA_BUFFER = (0xC01E0001, "the driver needs more dma buffer space to complete the requested operation."),
    GRAPHICS_INVALID_DISPLAY_ADAPTER = (0xC01E0002, "the specified display adapter handle is invalid."),
    GRAPHICS_ADAPTER_WAS_RESET = (0xC01E0003, "the specified display adapter and all of its state have been reset."),
    GRAPHICS_INVALID_DRIVER_MODEL = (0xC01E0004, "the driver stack does not match the expected driver model."),
    GRAPHICS_PRESENT_MODE_CHANGED = (0xC01E0005, "present happened but ended up into the changed desktop mode."),
    GRAPHICS_PRESENT_OCCLUDED = (0xC01E0006, "nothing to present due to desktop occlusion."),
    GRAPHICS_PRESENT_DENIED = (0xC01E0007, "not able to present due to denial of desktop access."),
    GRAPHICS_CANNOTCOLORCONVERT = (0xC01E0008, "not able to present with color conversion."),
    GRAPHICS_PRESENT_REDIRECTION_DISABLED = (0xC01E000B, "present redirection is disabled (desktop windowing management subsystem is off)."),
    GRAPHICS_PRESENT_UNOCCLUDED = (0xC01E000C, "previous exclusive vidpn source owner has released its ownership."),
    GRAPHICS_NO_VIDEO_MEMORY = (0xC01E0100, "not enough video memory is available to complete the operation."),
    GRAPHICS_CANT_LOCK_MEMORY = (0xC01E0101, "could not probe and lock the underlying memory of an allocation."),
    GRAPHICS_ALLOCATION_BUSY = (0xC01E0102, "the allocation is currently busy."),
    GRAPHICS_TOO_MANY_REFERENCES = (0xC01E0103, "an object being referenced has already reached the maximum reference count and cannot be referenced further."),
    GRAPHICS_TRY_AGAIN_LATER = (0xC01E0104, "a problem could not be solved due to an existing condition. try again later."),
    GRAPHICS_TRY_AGAIN_NOW = (0xC01E0105, "a problem could not be solved due to an existing condition. try again now."),
    GRAPHICS_ALLOCATION_INVALID = (0xC01E0106, "the allocation is invalid."),
    GRAPHICS_UNSWIZZLING_APERTURE_UNAVAILABLE = (0xC01E0107, "no more unswizzling apertures are currently available."),
    GRAPHICS_UNSWIZZLING_APERTURE_UNSUPPORTED = (0xC01E0108, "the current allocation cannot be unswizzled by an aperture."),
    GRAPHICS_CANT_EVICT_PINNED_ALLOCATION = (0xC01E0109, "the request failed because a pinned allocation cannot be evicted."),
    GRAPHICS_INVALID_ALLOCATION_USAGE = (0xC01E0110, "the allocation cannot be used from its current segment location for the specified operation."),
    GRAPHICS_CANT_RENDER_LOCKED_ALLOCATION = (0xC01E0111, "a locked allocation cannot be used in the current command buffer."),
    GRAPHICS_ALLOCATION_CLOSED = (0xC01E0112, "the allocation being referenced has been closed permanently."),
    GRAPHICS_INVALID_ALLOCATION_INSTANCE = (0xC01E0113, "an invalid allocation instance is being referenced."),
    GRAPHICS_INVALID_ALLOCATION_HANDLE = (0xC01E0114, "an invalid allocation handle is being referenced."),
    GRAPHICS_WRONG_ALLOCATION_DEVICE = (0xC01E0115, "the allocation being referenced does not belong to the current device."),
    GRAPHICS_ALLOCATION_CONTENT_LOST = (0xC01E0116, "the specified allocation lost its content."),
    GRAPHICS_GPU_EXCEPTION_ON_DEVICE = (0xC01E0200, "a gpu exception was detected on the given device. the device cannot be scheduled."),
    GRAPHICS_INVALID_VIDPN_TOPOLOGY = (0xC01E0300, "the specified vidpn topology is invalid."),
    GRAPHICS_VIDPN_TOPOLOGY_NOT_SUPPORTED = (0xC01E0301, "the specified vidpn topology is valid but is not supported by this model of the display adapter."),
    GRAPHICS_VIDPN_TOPOLOGY_CURRENTLY_NOT_SUPPORTED = (0xC01E0302, "the specified vidpn topology is valid but is not currently supported by the display adapter due to allocation of its resources."),
    GRAPHICS_INVALID_VIDPN = (0xC01E0303, "the specified vidpn handle is invalid."),
    GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE = (0xC01E0304, "the specified video present source is invalid."),
    GRAPHICS_INVALID_VIDEO_PRESENT_TARGET = (0xC01E0305, "the specified video present target is invalid."),
    GRAPHICS_VIDPN_MODALITY_NOT_SUPPORTED = (0xC01E0306, "the specified vidpn modality is not supported (for example, at least two of the pinned modes are not co-functional)."),
    GRAPHICS_INVALID_VIDPN_SOURCEMODESET = (0xC01E0308, "the specified vidpn source mode set is invalid."),
    GRAPHICS_INVALID_VIDPN_TARGETMODESET = (0xC01E0309, "the specified vidpn target mode set is invalid."),
    GRAPHICS_INVALID_FREQUENCY = (0xC01E030A, "the specified video signal frequency is invalid."),
    GRAPHICS_INVALID_ACTIVE_REGION = (0xC01E030B, "the specified video signal active region is invalid."),
    GRAPHICS_INVALID_TOTAL_REGION = (0xC01E030C, "the specified video signal total region is invalid."),
    GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE_MODE = (0xC01E0310, "the specified video present source mode is invalid."),
    GRAPHICS_INVALID_VIDEO_PRESENT_TARGET_MODE = (0xC01E0311, "the specified video present target mode is invalid."),
    GRAPHICS_PINNED_MODE_MUST_REMAIN_IN_SET = (0xC01E0312, "the pinned mode must remain in the set on the vidpn's co-functional modality enumeration."),
    GRAPHICS_PATH_ALREADY_IN_TOPOLOGY = (0xC01E0313, "the specified video present path is already in the vidpn's topology."),
    GRAPHICS_MODE_ALREADY_IN_MODESET = (0xC01E0314, "the specified mode is already in the mode set."),
    GRAPHICS_INVALID_VIDEOPRESENTSOURCESET = (0xC01E0315, "the specified video present source set is invalid."),
    GRAPHICS_INVALID_VIDEOPRESENTTARGETSET = (0xC01E0316, "the specified video present target set is invalid."),
    GRAPHICS_SOURCE_ALREADY_IN_SET = (0xC01E0317, "the specified video present source is already in the video present source set."),
    GRAPHICS_TARGET_ALREADY_IN_SET = (0xC01E0318, "the specified video present target is already in the video present target set."),
    GRAPHICS_INVALID_VIDPN_PRESENT_PATH = (0xC01E0319, "the specified vidpn present path is invalid."),
    GRAPHICS_NO_RECOMMENDED_VIDPN_TOPOLOGY = (0xC01E031A, "the miniport has no recommendation for augmenting the specified vidpn's topology."),
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGESET = (0xC01E031B, "the specified monitor frequency range set is invalid."),
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE = (0xC01E031C, "the specified monitor frequency range is invalid."),
    GRAPHICS_FREQUENCYRANGE_NOT_IN_SET = (0xC01E031D, "the specified frequency range is not in the specified monitor frequency range set."),
    GRAPHICS_FREQUENCYRANGE_ALREADY_IN_SET = (0xC01E031F, "the specified frequency range is already in the specified monitor frequency range set."),
    GRAPHICS_STALE_MODESET = (0xC01E0320, "the specified mode set is stale. reacquire the new mode set."),
    GRAPHICS_INVALID_MONITOR_SOURCEMODESET = (0xC01E0321, "the specified monitor source mode set is invalid."),
    GRAPHICS_INVALID_MONITOR_SOURCE_MODE = (0xC01E0322, "the specified monitor source mode is invalid."),
    GRAPHICS_NO_RECOMMENDED_FUNCTIONAL_VIDPN = (0xC01E0323, "the miniport does not have a recommendation regarding the request to provide a functional vidpn given the current display adapter configuration."),
    GRAPHICS_MODE_ID_MUST_BE_UNIQUE = (0xC01E0324, "the id of the specified mode is being used by another mode in the set."),
    GRAPHICS_EMPTY_ADAPTER_MONITOR_MODE_SUPPORT_INTERSECTION = (0xC01E0325, "the system failed to determine a mode that is supported by both the display adapter and the monitor connected to it."),
    GRAPHICS_VIDEO_PRESENT_TARGETS_LESS_THAN_SOURCES = (0xC01E0326, "the number of video present targets must be greater than or equal to the number of video present sources."),
    GRAPHICS_PATH_NOT_IN_TOPOLOGY = (0xC01E0327, "the specified present path is not in the vidpn's topology."),
    GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_SOURCE = (0xC01E0328, "the display adapter must have at least one video present source."),
    GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_TARGET = (0xC01E0329, "the display adapter must have at least one video present target."),
    GRAPHICS_INVALID_MONITORDESCRIPTORSET = (0xC01E032A, "the specified monitor descriptor set is invalid."),
    GRAPHICS_INVALID_MONITORDESCRIPTOR = (0xC01E032B, "the specified monitor descriptor is invalid."),
    GRAPHICS_MONITORDESCRIPTOR_NOT_IN_SET = (0xC01E032C, "the specified descriptor is not in the specified monitor descriptor set."),
    GRAPHICS_MONITORDESCRIPTOR_ALREADY_IN_SET = (0xC01E032D, "the specified descriptor is already in the specified monitor descriptor set."),
    GRAPHICS_MONITORDESCRIPTOR_ID_MUST_BE_UNIQUE = (0xC01E032E, "the id of the specified monitor descriptor is being used by another descriptor in the set."),
    GRAPHICS_INVALID_VIDPN_TARGET_SUBSET_TYPE = (0xC01E032F, "the specified video present target subset type is invalid."),
    GRAPHICS_RESOURCES_NOT_RELATED = (0xC01E0330, "two or more of the specified resources are not related to each other, as defined by the interface semantics."),
    GRAPHICS_SOURCE_ID_MUST_BE_UNIQUE = (0xC01E0331, "the id of the specified video present source is being used by another source in the set."),
    GRAPHICS_TARGET_ID_MUST_BE_UNIQUE = (0xC01E0332, "the id of the specified video present target is being used by another target in the set."),
    GRAPHICS_NO_AVAILABLE_VIDPN_TARGET = (0xC01E0333, "the specified vidpn source cannot be used because there is no available vidpn target to connect it to."),
    GRAPHICS_MONITOR_COULD_NOT_BE_ASSOCIATED_WITH_ADAPTER = (0xC01E0334, "the newly arrived monitor could not be associated with a display adapter."),
    GRAPHICS_NO_VIDPNMGR = (0xC01E0335, "the particular display adapter does not have an associated vidpn manager."),
    GRAPHICS_NO_ACTIVE_VIDPN = (0xC01E0336, "the vidpn manager of the particular display adapter does not have an active vidpn."),
    GRAPHICS_STALE_VIDPN_TOPOLOGY = (0xC01E0337, "the specified vidpn topology is stale; obtain the new topology."),
    GRAPHICS_MONITOR_NOT_CONNECTED = (0xC01E0338, "no monitor is connected on the specified video present target."),
    GRAPHICS_SOURCE_NOT_IN_TOPOLOGY = (0xC01E0339, "the specified source is not part of the specified vidpn's topology."),
    GRAPHICS_INVALID_PRIMARYSURFACE_SIZE = (0xC01E033A, "the specified primary surface size is invalid."),
    GRAPHICS_INVALID_VISIBLEREGION_SIZE = (0xC01E033B, "the specified visible region size is invalid."),
    GRAPHICS_INVALID_STRIDE = (0xC01E033C, "the specified stride is invalid."),
    GRAPHICS_INVALID_PIXELFORMAT = (0xC01E033D, "the specified pixel format is invalid."),
    GRAPHICS_INVALID_COLORBASIS = (0xC01E033E, "the specified color basis is invalid."),
    GRAPHICS_INVALID_PIXELVALUEACCESSMODE = (0xC01E033F, "the specified pixel value access mode is invalid."),
    GRAPHICS_TARGET_NOT_IN_TOPOLOGY = (0xC01E0340, "the specified target is not part of the specified vidpn's topology."),
    GRAPHICS_NO_DISPLAY_MODE_MANAGEMENT_SUPPORT = (0xC01E0341, "failed to acquire the display mode management interface."),
    GRAPHICS_VIDPN_SOURCE_IN_USE = (0xC01E0342, "the specified vidpn source is already owned by a dmm client and cannot be used until that client releases it."),
    GRAPHICS_CANT_ACCESS_ACTIVE_VIDPN = (0xC01E0343, "the specified vidpn is active and cannot be accessed."),
    GRAPHICS_INVALID_PATH_IMPORTANCE_ORDINAL = (0xC01E0344, "the specified vidpn's present path importance ordinal is invalid."),
    GRAPHICS_INVALID_PATH_CONTENT_GEOMETRY_TRANSFORMATION = (0xC01E0345, "the specified vidpn's present path content geometry transformation is invalid."),
    GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_SUPPORTED = (0xC01E0346, "the specified content geometry transformation is not supported on the respective vidpn present path."),
    GRAPHICS_INVALID_GAMMA_RAMP = (0xC01E0347, "the specified gamma ramp is invalid."),
    GRAPHICS_GAMMA_RAMP_NOT_SUPPORTED = (0xC01E0348, "the specified gamma ramp is not supported on the respective vidpn present path."),
    GRAPHICS_MULTISAMPLING_NOT_SUPPORTED = (0xC01E0349, "multisampling is not supported on the respective vidpn present path."),
    GRAPHICS_MODE_NOT_IN_MODESET = (0xC01E034A, "the specified mode is not in the specified mode set."),
    GRAPHICS_INVALID_VIDPN_TOPOLOGY_RECOMMENDATION_REASON = (0xC01E034D, "the specified vidpn topology recommendation reason is invalid."),
    GRAPHICS_INVALID_PATH_CONTENT_TYPE = (0xC01E034E, "the specified vidpn present path content type is invalid."),
    GRAPHICS_INVALID_COPYPROTECTION_TYPE = (0xC01E034F, "the specified vidpn present path copy protection type is invalid."),
    GRAPHICS_UNASSIGNED_MODESET_ALREADY_EXISTS = (0xC01E0350, "only one unassigned mode set can exist at any one time for a particular vidpn source or target."),
    GRAPHICS_INVALID_SCANLINE_ORDERING = (0xC01E0352, "the specified scan line ordering type is invalid."),
    GRAPHICS_TOPOLOGY_CHANGES_NOT_ALLOWED = (0xC01E0353, "the topology changes are not allowed for the specified vidpn."),
    GRAPHICS_NO_AVAILABLE_IMPORTANCE_ORDINALS = (0xC01E0354, "all available importance ordinals are being used in the specified topology."),
    GRAPHICS_INCOMPATIBLE_PRIVATE_FORMAT = (0xC01E0355, "the specified primary surface has a different private-format attribute than the current primary surface."),
    GRAPHICS_INVALID_MODE_PRUNING_ALGORITHM = (0xC01E0356, "the specified mode-pruning algorithm is invalid."),
    GRAPHICS_INVALID_MONITOR_CAPABILITY_ORIGIN = (0xC01E0357, "the specified monitor-capability origin is invalid."),
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE_CONSTRAINT = (0xC01E0358, "the specified monitor-frequency range constraint is invalid."),
    GRAPHICS_MAX_NUM_PATHS_REACHED = (0xC01E0359, "the maximum supported number of present paths has been reached."),
    GRAPHICS_CANCEL_VIDPN_TOPOLOGY_AUGMENTATION = (0xC01E035A, "the miniport requested that augmentation be canceled for the specified source of the specified vidpn's topology."),
    GRAPHICS_INVALID_CLIENT_TYPE = (0xC01E035B, "the specified client type was not recognized."),
    GRAPHICS_CLIENTVIDPN_NOT_SET = (0xC01E035C, "the client vidpn is not set on this adapter (for example, no user mode-initiated mode changes have taken place on this adapter)."),
    GRAPHICS_SPECIFIED_CHILD_ALREADY_CONNECTED = (0xC01E0400, "the specified display adapter child device already has an external device connected to it."),
    GRAPHICS_CHILD_DESCRIPTOR_NOT_SUPPORTED = (0xC01E0401, "the display adapter child device does not support reporting a descriptor."),
    GRAPHICS_NOT_A_LINKED_ADAPTER = (0xC01E0430, "the display adapter is not linked to any other adapters."),
    GRAPHICS_LEADLINK_NOT_ENUMERATED = (0xC01E0431, "the lead adapter in a linked configuration was not enumerated yet."),
    GRAPHICS_CHAINLINKS_NOT_ENUMERATED = (0xC01E0432, "some chain adapters in a linked configuration have not yet been enumerated."),
    GRAPHICS_ADAPTER_CHAIN_NOT_READY = (0xC01E0433, "the chain of linked adapters is not ready to start because of an unknown failure."),
    GRAPHICS_CHAINLINKS_NOT_STARTED = (0xC01E0434, "an attempt was made to start a lead link display adapter when the chain links had not yet started."),
    GRAPHICS_CHAINLINKS_NOT_POWERED_ON = (0xC01E0435, "an attempt was made to turn on a lead link display adapter when the chain links were turned off."),
    GRAPHICS_INCONSISTENT_DEVICE_LINK_STATE = (0xC01E0436, "the adapter link was found in an inconsistent state. not all adapters are in an expected pnp/power state."),
    GRAPHICS_NOT_POST_DEVICE_DRIVER = (0xC01E0438, "the driver trying to start is not the same as the driver for the posted display adapter."),
    GRAPHICS_ADAPTER_ACCESS_NOT_EXCLUDED = (0xC01E043B, "an operation is being attempted that requires the display adapter to be in a quiescent state."),
    GRAPHICS_OPM_NOT_SUPPORTED = (0xC01E0500, "the driver does not support opm."),
    GRAPHICS_COPP_NOT_SUPPORTED = (0xC01E0501, "the driver does not support copp."),
    GRAPHICS_UAB_NOT_SUPPORTED = (0xC01E0502, "the driver does not support uab."),
    GRAPHICS_OPM_INVALID_ENCRYPTED_PARAMETERS = (0xC01E0503, "the specified encrypted parameters are invalid."),
    GRAPHICS_OPM_PARAMETER_ARRAY_TOO_SMALL = (0xC01E0504, "an array passed to a function cannot hold all of the data that the function wants to put in it."),
    GRAPHICS_OPM_NO_PROTECTED_OUTPUTS_EXIST = (0xC01E0505, "the gdi display device passed to this function does not have any active protected outputs."),
    GRAPHICS_PVP_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME = (0xC01E0506, "the pvp cannot find an actual gdi display device that corresponds to the passed-in gdi display device name."),
    GRAPHICS_PVP_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP = (0xC01E0507, "this function failed because the gdi display device passed to it was not attached to the windows desktop."),
    GRAPHICS_PVP_MIRRORING_DEVICES_NOT_SUPPORTED = (0xC01E0508, "the pvp does not support mirroring display devices because they do not have any protected outputs."),
    GRAPHICS_OPM_INVALID_POINTER = (0xC01E050A, "the function failed because an invalid pointer parameter was passed to it. a pointer parameter is invalid if it is null, is not correctly aligned, or it points to an invalid address or a kernel mode address."),
    GRAPHICS_OPM_INTERNAL_ERROR = (0xC01E050B, "an internal error caused an operation to fail."),
    GRAPHICS_OPM_INVALID_HANDLE = (0xC01E050C, "the function failed because the caller passed in an invalid opm user-mode handle."),
    GRAPHICS_PVP_NO_MONITORS_CORRESPOND_TO_DISPLAY_DEVICE = (0xC01E050D, "this function failed because the gdi device passed to it did not have any monitors associated with it."),
    GRAPHICS_PVP_INVALID_CERTIFICATE_LENGTH = (0xC01E050E, "a certificate could not be returned because the certificate buffer passed to the function was too small."),
    GRAPHICS_OPM_SPANNING_MODE_ENABLED = (0xC01E050F, "dxgkddiopmcreateprotectedoutput() could not create a protected output because the video present target is in spanning mode."),
    GRAPHICS_OPM_THEATER_MODE_ENABLED = (0xC01E0510, "dxgkddiopmcreateprotectedoutput() could not create a protected output because the video present target is in theater mode."),
    GRAPHICS_PVP_HFS_FAILED = (0xC01E0511, "the function call failed because the display adapter's hardware functionality scan (hfs) failed to validate the graphics hardware."),
    GRAPHICS_OPM_INVALID_SRM = (0xC01E0512, "the hdcp srm passed to this function did not comply with section 5 of the hdcp 1.1 specification."),
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_HDCP = (0xC01E0513, "the protected output cannot enable the hdcp system because it does not support it."),
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_ACP = (0xC01E0514, "the protected output cannot enable analog copy protection because it does not support it."),
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_CGMSA = (0xC01E0515, "the protected output cannot enable the cgms-a protection technology because it does not support it."),
    GRAPHICS_OPM_HDCP_SRM_NEVER_SET = (0xC01E0516, "dxgkddiopmgetinformation() cannot return the version of the srm being used because the application never successfully passed an srm to the protected output."),
    GRAPHICS_OPM_RESOLUTION_TOO_HIGH = (0xC01E0517, "dxgkddiopmconfigureprotectedoutput() cannot enable the specified output protection technology because the screen resolution of the output is too high."),
    GRAPHICS_OPM_ALL_HDCP_HARDWARE_ALREADY_IN_USE = (0xC01E0518, "dxgkddiopmconfigureprotectedoutput() cannot enable hdcp because other physical outputs are using the display adapter's hdcp hardware."),
    GRAPHICS_OPM_PROTECTED_OUTPUT_NO_LONGER_EXISTS = (0xC01E051A, "the operating system asynchronously destroyed this opm-protected output because the operating system state changed. this error typically occurs because the monitor pdo associated with this protected output was removed or stopped, the protected output's session became a nonconsole session, or the protected output's desktop became inactive."),
    GRAPHICS_OPM_SESSION_TYPE_CHANGE_IN_PROGRESS = (0xC01E051B, "opm functions cannot be called when a session is changing its type. three types of sessions currently exist: console, disconnected, and remote (rdp or ica)."),
    GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_COPP_SEMANTICS = (0xC01E051C, "the dxgkddiopmgetcoppcompatibleinformation, dxgkddiopmgetinformation, or dxgkddiopmconfigureprotectedoutput function failed. this error is returned only if a protected output has opm semantics."),
    GRAPHICS_OPM_INVALID_INFORMATION_REQUEST = (0xC01E051D, "the dxgkddiopmgetinformation and dxgkddiopmgetcoppcompatibleinformation functions return this error code if the passed-in sequence number is not the expected sequence number or the passed-in omac value is invalid."),
    GRAPHICS_OPM_DRIVER_INTERNAL_ERROR = (0xC01E051E, "the function failed because an unexpected error occurred inside a display driver."),
    GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_OPM_SEMANTICS = (0xC01E051F, "the dxgkddiopmgetcoppcompatibleinformation, dxgkddiopmgetinformation, or dxgkddiopmconfigureprotectedoutput function failed. this error is returned only if a protected output has copp semantics."),
    GRAPHICS_OPM_SIGNALING_NOT_SUPPORTED = (0xC01E0520, "the dxgkddiopmgetcoppcompatibleinformation and dxgkddiopmconfigureprotectedoutput functions return this error if the display driver does not support the dxgkmdt_opm_get_acp_and_cgmsa_signaling and dxgkmdt_opm_set_acp_and_cgmsa_signaling guids."),
    GRAPHICS_OPM_INVALID_CONFIGURATION_REQUEST = (0xC01E0521, "the dxgkddiopmconfigureprotectedoutput function returns this error code if the passed-in sequence number is not the expected sequence number or the passed-in omac value is invalid."),
    GRAPHICS_I2C_NOT_SUPPORTED = (0xC01E0580, "the monitor connected to the specified video output does not have an i2c bus."),
    GRAPHICS_I2C_DEVICE_DOES_NOT_EXIST = (0xC01E0581, "no device on the i2c bus has the specified address."),
    GRAPHICS_I2C_ERROR_TRANSMITTING_DATA = (0xC01E0582, "an error occurred while transmitting data to the device on the i2c bus."),
    GRAPHICS_I2C_ERROR_RECEIVING_DATA = (0xC01E0583, "an error occurred while receiving data from the device on the i2c bus."),
    GRAPHICS_DDCCI_VCP_NOT_SUPPORTED = (0xC01E0584, "the monitor does not support the specified vcp code."),
    GRAPHICS_DDCCI_INVALID_DATA = (0xC01E0585, "the data received from the monitor is invalid."),
    GRAPHICS_DDCCI_MONITOR_RETURNED_INVALID_TIMING_STATUS_BYTE = (0xC01E0586, "a function call failed because a monitor returned an invalid timing status byte when the operating system used the ddc/ci get timing report and timing message command to get a timing report from a monitor."),
    GRAPHICS_DDCCI_INVALID_CAPABILITIES_STRING = (0xC01E0587, "a monitor returned a ddc/ci capabilities string that did not comply with the access.bus 3.0, ddc/ci 1.1, or mccs 2 revision 1 specification."),
    GRAPHICS_MCA_INTERNAL_ERROR = (0xC01E0588, "an internal error caused an operation to fail."),
    GRAPHICS_DDCCI_INVALID_MESSAGE_COMMAND = (0xC01E0589, "an operation failed because a ddc/ci message had an invalid value in its command field."),
    GRAPHICS_DDCCI_INVALID_MESSAGE_LENGTH = (0xC01E058A, "this error occurred because a ddc/ci message had an invalid value in its length field."),
    GRAPHICS_DDCCI_INVALID_MESSAGE_CHECKSUM = (0xC01E058B, "this error occurred because the value in a ddc/ci message's checksum field did not match the message's computed checksum value. this error implies that the data was corrupted while it was being transmitted from a monitor to a computer."),
    GRAPHICS_INVALID_PHYSICAL_MONITOR_HANDLE = (0xC01E058C, "this function failed because an invalid monitor handle was passed to it."),
    GRAPHICS_MONITOR_NO_LONGER_EXISTS = (0xC01E058D, "the operating system asynchronously destroyed the monitor that corresponds to this handle because the operating system's state changed. this error typically occurs because the monitor pdo associated with this handle was removed or stopped, or a display mode change occurred. a display mode change occurs when windows sends a wm_displaychange message to applications."),
    GRAPHICS_ONLY_CONSOLE_SESSION_SUPPORTED = (0xC01E05E0, "this function can be used only if a program is running in the local console session. it cannot be used if a program is running on a remote desktop session or on a terminal server session."),
    GRAPHICS_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME = (0xC01E05E1, "this function cannot find an actual gdi display device that corresponds to the specified gdi display device name."),
    GRAPHICS_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP = (0xC01E05E2, "the function failed because the specified gdi display device was not attached to the windows desktop."),
    GRAPHICS_MIRRORING_DEVICES_NOT_SUPPORTED = (0xC01E05E3, "this function does not support gdi mirroring display devices because gdi mirroring display devices do not have any physical monitors associated with them."),
    GRAPHICS_INVALID_POINTER = (0xC01E05E4, "the function failed because an invalid pointer parameter was passed to it. a pointer parameter is invalid if it is null, is not correctly aligned, or it points to an invalid address or to a kernel mode address."),
    GRAPHICS_NO_MONITORS_CORRESPOND_TO_DISPLAY_DEVICE = (0xC01E05E5, "this function failed because the gdi device passed to it did not have a monitor associated with it."),
    GRAPHICS_PARAMETER_ARRAY_TOO_SMALL = (0xC01E05E6, "an array passed to the function cannot hold all of the data that the function must copy into the array."),
    GRAPHICS_INTERNAL_ERROR = (0xC01E05E7, "an internal error caused an operation to fail."),
    GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS = (0xC01E05E8, "the function failed because the current session is changing its type. this function cannot be called when the current session is changing its type. three types of sessions currently exist: console, disconnected, and remote (rdp or ica)."),

    // -------------------------------------------------------------------------
    // Error: full volume encryption (facility 0x021)
    // -------------------------------------------------------------------------
    FVE_LOCKED_VOLUME = (0xC0210000, "the volume must be unlocked before it can be used."),
    FVE_NOT_ENCRYPTED = (0xC0210001, "the volume is fully decrypted and no key is available."),
    FVE_BAD_INFORMATION = (0xC0210002, "the control block for the encrypted volume is not valid."),
    FVE_TOO_SMALL = (0xC0210003, "not enough free space remains on the volume to allow encryption."),
    FVE_FAILED_WRONG_FS = (0xC0210004, "the partition cannot be encrypted because the file system is not supported."),
    FVE_BAD_PARTITION_SIZE = (0xC0210005, "the file system is inconsistent. run the check disk utility."),
    FVE_FS_NOT_EXTENDED = (0xC0210006, "the file system does not extend to the end of the volume."),
    FVE_FS_MOUNTED = (0xC0210007, "this operation cannot be performed while a file system is mounted on the volume."),
    FVE_NO_LICENSE = (0xC0210008, "bitlocker drive encryption is not included with this version of windows."),
    FVE_ACTION_NOT_ALLOWED = (0xC0210009, "the requested action was denied by the fve control engine."),
    FVE_BAD_DATA = (0xC021000A, "the data supplied is malformed."),
    FVE_VOLUME_NOT_BOUND = (0xC021000B, "the volume is not bound to the system."),
    FVE_NOT_DATA_VOLUME = (0xC021000C, "the volume specified is not a data volume."),
    FVE_CONV_READ_ERROR = (0xC021000D, "a read operation failed while converting the volume."),
    FVE_CONV_WRITE_ERROR = (0xC021000E, "a write operation failed while converting the volume."),
    FVE_OVERLAPPED_UPDATE = (0xC021000F, "the control block for the encrypted volume was updated by another thread. try again."),
    FVE_FAILED_SECTOR_SIZE = (0xC0210010, "the volume encryption algorithm cannot be used on this sector size."),
    FVE_FAILED_AUTHENTICATION = (0xC0210011, "bitlocker recovery authentication failed."),
    FVE_NOT_OS_VOLUME = (0xC0210012, "the volume specified is not the boot operating system volume."),
    FVE_KEYFILE_NOT_FOUND = (0xC0210013, "the bitlocker startup key or recovery password could not be read from external media."),
    FVE_KEYFILE_INVALID = (0xC0210014, "the bitlocker startup key or recovery password file is corrupt or invalid."),
    FVE_KEYFILE_NO_VMK = (0xC0210015, "the bitlocker encryption key could not be obtained from the startup key or the recovery password."),
    FVE_TPM_DISABLED = (0xC0210016, "the tpm is disabled."),
    FVE_TPM_SRK_AUTH_NOT_ZERO = (0xC0210017, "the authorization data for the srk of the tpm is not zero."),
    FVE_TPM_INVALID_PCR = (0xC0210018, "the system boot information changed or the tpm locked out access to bitlocker encryption keys until the computer is restarted."),
    FVE_TPM_NO_VMK = (0xC0210019, "the bitlocker encryption key could not be obtained from the tpm."),
    FVE_PIN_INVALID = (0xC021001A, "the bitlocker encryption key could not be obtained from the tpm and pin."),
    FVE_AUTH_INVALID_APPLICATION = (0xC021001B, "a boot application hash does not match the hash computed when bitlocker was turned on."),
    FVE_AUTH_INVALID_CONFIG = (0xC021001C, "the boot configuration data (bcd) settings are not supported or have changed because bitlocker was enabled."),
    FVE_DEBUGGER_ENABLED = (0xC021001D, "boot debugging is enabled. run windows boot configuration data store editor (bcdedit.exe) to turn it off."),
    FVE_DRY_RUN_FAILED = (0xC021001E, "the bitlocker encryption key could not be obtained."),
    FVE_BAD_METADATA_POINTER = (0xC021001F, "the metadata disk region pointer is incorrect."),
    FVE_OLD_METADATA_COPY = (0xC0210020, "the backup copy of the metadata is out of date."),
    FVE_REBOOT_REQUIRED = (0xC0210021, "no action was taken because a system restart is required."),
    FVE_RAW_ACCESS = (0xC0210022, "no action was taken because bitlocker drive encryption is in raw access mode."),
    FVE_RAW_BLOCKED = (0xC0210023, "bitlocker drive encryption cannot enter raw access mode for this volume."),
    FVE_NO_FEATURE_LICENSE = (0xC0210026, "this feature of bitlocker drive encryption is not included with this version of windows."),
    FVE_POLICY_USER_DISABLE_RDV_NOT_ALLOWED = (0xC0210027, "group policy does not permit turning off bitlocker drive encryption on roaming data volumes."),
    FVE_CONV_RECOVERY_FAILED = (0xC0210028, "bitlocker drive encryption failed to recover from aborted conversion. this could be due to either all conversion logs being corrupted or the media being write-protected."),
    FVE_VIRTUALIZED_SPACE_TOO_BIG = (0xC0210029, "the requested virtualization size is too big."),
    FVE_VOLUME_TOO_SMALL = (0xC0210030, "the drive is too small to be protected using bitlocker drive encryption."),

    // -------------------------------------------------------------------------
    // Error: Windows Filtering Platform (facility 0x022)
    // -------------------------------------------------------------------------
    FWP_CALLOUT_NOT_FOUND = (0xC0220001, "the callout does not exist."),
    FWP_CONDITION_NOT_FOUND = (0xC0220002, "the filter condition does not exist."),
    FWP_FILTER_NOT_FOUND = (0xC0220003, "the filter does not exist."),
    FWP_LAYER_NOT_FOUND = (0xC0220004, "the layer does not exist."),
    FWP_PROVIDER_NOT_FOUND = (0xC0220005, "the provider does not exist."),
    FWP_PROVIDER_CONTEXT_NOT_FOUND = (0xC0220006, "the provider context does not exist."),
    FWP_SUBLAYER_NOT_FOUND = (0xC0220007, "the sublayer does not exist."),
    FWP_NOT_FOUND = (0xC0220008, "the object does not exist."),
    FWP_ALREADY_EXISTS = (0xC0220009, "an object with that guid or luid already exists."),
    FWP_IN_USE = (0xC022000A, "the object is referenced by other objects and cannot be deleted."),
    FWP_DYNAMIC_SESSION_IN_PROGRESS = (0xC022000B, "the call is not allowed from within a dynamic session."),
    FWP_WRONG_SESSION = (0xC022000C, "the call was made from the wrong session and cannot be completed."),
    FWP_NO_TXN_IN_PROGRESS = (0xC022000D, "the call must be made from within an explicit transaction."),
    FWP_TXN_IN_PROGRESS = (0xC022000E, "the call is not allowed from within an explicit transaction."),
    FWP_TXN_ABORTED = (0xC022000F, "the explicit transaction has been forcibly canceled."),
    FWP_SESSION_ABORTED = (0xC0220010, "the session has been canceled."),
    FWP_INCOMPATIBLE_TXN = (0xC0220011, "the call is not allowed from within a read-only transaction."),
    FWP_TIMEOUT = (0xC0220012, "the call timed out while waiting to acquire the transaction lock."),
    FWP_NET_EVENTS_DISABLED = (0xC0220013, "the collection of network diagnostic events is disabled."),
    FWP_INCOMPATIBLE_LAYER = (0xC0220014, "the operation is not supported by the specified layer."),
    FWP_KM_CLIENTS_ONLY = (0xC0220015, "the call is allowed for kernel-mode callers only."),
    FWP_LIFETIME_MISMATCH = (0xC0220016, "the call tried to associate two objects with incompatible lifetimes."),
    FWP_BUILTIN_OBJECT = (0xC0220017, "the object is built-in and cannot be deleted."),
    FWP_TOO_MANY_BOOTTIME_FILTERS = (0xC0220018, "the maximum number of boot-time filters has been reached."),
    FWP_NOTIFICATION_DROPPED = (0xC0220019, "a notification could not be delivered because a message queue has reached maximum capacity."),
    FWP_TRAFFIC_MISMATCH = (0xC022001A, "the traffic parameters do not match those for the security association context."),
    FWP_INCOMPATIBLE_SA_STATE = (0xC022001B, "the call is not allowed for the current security association state."),
    FWP_NULL_POINTER = (0xC022001C, "a required pointer is null."),
    FWP_INVALID_ENUMERATOR = (0xC022001D, "an enumerator is not valid."),
    FWP_INVALID_FLAGS = (0xC022001E, "the flags field contains an invalid value."),
    FWP_INVALID_NET_MASK = (0xC022001F, "a network mask is not valid."),
    FWP_INVALID_RANGE = (0xC0220020, "an fwp_range is not valid."),
    FWP_INVALID_INTERVAL = (0xC0220021, "the time interval is not valid."),
    FWP_ZERO_LENGTH_ARRAY = (0xC0220022, "an array that must contain at least one element has a zero length."),
    FWP_NULL_DISPLAY_NAME = (0xC0220023, "the displaydata.name field cannot be null."),
    FWP_INVALID_ACTION_TYPE = (0xC0220024, "the action type is not one of the allowed action types for a filter."),
    FWP_INVALID_WEIGHT = (0xC0220025, "the filter weight is not valid."),
    FWP_MATCH_TYPE_MISMATCH = (0xC0220026, "a filter condition contains a match type that is not compatible with the operands."),
    FWP_TYPE_MISMATCH = (0xC0220027, "an fwp_value or fwpm_condition_value is of the wrong type."),
    FWP_OUT_OF_BOUNDS = (0xC0220028, "an integer value is outside the allowed range."),
    FWP_RESERVED = (0xC0220029, "a reserved field is nonzero."),
    FWP_DUPLICATE_CONDITION = (0xC022002A, "a filter cannot contain multiple conditions operating on a single field."),
    FWP_DUPLICATE_KEYMOD = (0xC022002B, "a policy cannot contain the same keying module more than once."),
    FWP_ACTION_INCOMPATIBLE_WITH_LAYER = (0xC022002C, "the action type is not compatible with the layer."),
    FWP_ACTION_INCOMPATIBLE_WITH_SUBLAYER = (0xC022002D, "the action type is not compatible with the sublayer."),
    FWP_CONTEXT_INCOMPATIBLE_WITH_LAYER = (0xC022002E, "the raw context or the provider context is not compatible with the layer."),
    FWP_CONTEXT_INCOMPATIBLE_WITH_CALLOUT = (0xC022002F, "the raw context or the provider context is not compatible with the callout."),
    FWP_INCOMPATIBLE_AUTH_METHOD = (0xC0220030, "the authentication method is not compatible with the policy type."),
    FWP_INCOMPATIBLE_DH_GROUP = (0xC0220031, "the diffie-hellman group is not compatible with the policy type."),
    FWP_EM_NOT_SUPPORTED = (0xC0220032, "an ike policy cannot contain an extended mode policy."),
    FWP_NEVER_MATCH = (0xC0220033, "the enumeration template or subscription will never match any objects."),
    FWP_PROVIDER_CONTEXT_MISMATCH = (0xC0220034, "the provider context is of the wrong type."),
    FWP_INVALID_PARAMETER = (0xC0220035, "the parameter is incorrect."),
    FWP_TOO_MANY_SUBLAYERS = (0xC0220036, "the maximum number of sublayers has been reached."),
    FWP_CALLOUT_NOTIFICATION_FAILED = (0xC0220037, "the notification function for a callout returned an error."),
    FWP_INCOMPATIBLE_AUTH_CONFIG = (0xC0220038, "the ipsec authentication configuration is not compatible with the authentication type."),
    FWP_INCOMPATIBLE_CIPHER_CONFIG = (0xC0220039, "the ipsec cipher configuration is not compatible with the cipher type."),
    FWP_DUPLICATE_AUTH_METHOD = (0xC022003C, "a policy cannot contain the same auth method more than once."),
    FWP_TCPIP_NOT_READY = (0xC0220100, "the tcp/ip stack is not ready."),
    FWP_INJECT_HANDLE_CLOSING = (0xC0220101, "the injection handle is being closed by another thread."),
    FWP_INJECT_HANDLE_STALE = (0xC0220102, "the injection handle is stale."),
    FWP_CANNOT_PEND = (0xC0220103, "the classify cannot be pended."),

    // -------------------------------------------------------------------------
    // Error: NDIS (facility 0x023)
    // -------------------------------------------------------------------------
    NDIS_CLOSING = (0xC0230002, "the binding to the network interface is being closed."),
    NDIS_BAD_VERSION = (0xC0230004, "an invalid version was specified."),
    NDIS_BAD_CHARACTERISTICS = (0xC0230005, "an invalid characteristics table was used."),
    NDIS_ADAPTER_NOT_FOUND = (0xC0230006, "failed to find the network interface or the network interface is not ready."),
    NDIS_OPEN_FAILED = (0xC0230007, "failed to open the network interface."),
    NDIS_DEVICE_FAILED = (0xC0230008, "the network interface has encountered an internal unrecoverable failure."),
    NDIS_MULTICAST_FULL = (0xC0230009, "the multicast list on the network interface is full."),
    NDIS_MULTICAST_EXISTS = (0xC023000A, "an attempt was made to add a duplicate multicast address to the list."),
    NDIS_MULTICAST_NOT_FOUND = (0xC023000B, "at attempt was made to remove a multicast address that was never added."),
    NDIS_REQUEST_ABORTED = (0xC023000C, "the network interface aborted the request."),
    NDIS_RESET_IN_PROGRESS = (0xC023000D, "the network interface cannot process the request because it is being reset."),
    NDIS_INVALID_PACKET = (0xC023000F, "an attempt was made to send an invalid packet on a network interface."),
    NDIS_INVALID_DEVICE_REQUEST = (0xC0230010, "the specified request is not a valid operation for the target device."),
    NDIS_ADAPTER_NOT_READY = (0xC0230011, "the network interface is not ready to complete this operation."),
    NDIS_INVALID_LENGTH = (0xC0230014, "the length of the buffer submitted for this operation is not valid."),
    NDIS_INVALID_DATA = (0xC0230015, "the data used for this operation is not valid."),
    NDIS_BUFFER_TOO_SHORT = (0xC0230016, "the length of the submitted buffer for this operation is too small."),
    NDIS_INVALID_OID = (0xC0230017, "the network interface does not support this object identifier."),
    NDIS_ADAPTER_REMOVED = (0xC0230018, "the network interface has been removed."),
    NDIS_UNSUPPORTED_MEDIA = (0xC0230019, "the network interface does not support this media type."),
    NDIS_GROUP_ADDRESS_IN_USE = (0xC023001A, "an attempt was made to remove a token ring group address that is in use by other components."),
    NDIS_FILE_NOT_FOUND = (0xC023001B, "an attempt was made to map a file that cannot be found."),
    NDIS_ERROR_READING_FILE = (0xC023001C, "an error occurred while ndis tried to map the file."),
    NDIS_ALREADY_MAPPED = (0xC023001D, "an attempt was made to map a file that is already mapped."),
    NDIS_RESOURCE_CONFLICT = (0xC023001E, "an attempt to allocate a hardware resource failed because the resource is used by another component."),
    NDIS_MEDIA_DISCONNECTED = (0xC023001F, "the i/o operation failed because the network media is disconnected or the wireless access point is out of range."),
    NDIS_INVALID_ADDRESS = (0xC0230022, "the network address used in the request is invalid."),
    NDIS_PAUSED = (0xC023002A, "the offload operation on the network interface has been paused."),
    NDIS_INTERFACE_NOT_FOUND = (0xC023002B, "the network interface was not found."),
    NDIS_UNSUPPORTED_REVISION = (0xC023002C, "the revision number specified in the structure is not supported."),
    NDIS_INVALID_PORT = (0xC023002D, "the specified port does not exist on this network interface."),
    NDIS_INVALID_PORT_STATE = (0xC023002E, "the current state of the specified port on this network interface does not support the requested operation."),
    NDIS_LOW_POWER_STATE = (0xC023002F, "the miniport adapter is in a lower power state."),
    NDIS_NOT_SUPPORTED = (0xC02300BB, "the network interface does not support this request."),
    NDIS_OFFLOAD_POLICY = (0xC023100F, "the tcp connection is not offloadable because of a local policy setting."),
    NDIS_OFFLOAD_CONNECTION_REJECTED = (0xC0231012, "the tcp connection is not offloadable by the chimney offload target."),
    NDIS_OFFLOAD_PATH_REJECTED = (0xC0231013, "the ip path object is not in an offloadable state."),
    NDIS_DOT11_AUTO_CONFIG_ENABLED = (0xC0232000, "the wireless lan interface is in auto-configuration mode and does not support the requested parameter change operation."),
    NDIS_DOT11_MEDIA_IN_USE = (0xC0232001, "the wireless lan interface is busy and cannot perform the requested operation."),
    NDIS_DOT11_POWER_STATE_INVALID = (0xC0232002, "the wireless lan interface is power down and does not support the requested operation."),
    NDIS_PM_WOL_PATTERN_LIST_FULL = (0xC0232003, "the list of wake on lan patterns is full."),
    NDIS_PM_PROTOCOL_OFFLOAD_LIST_FULL = (0xC0232004, "the list of low power protocol offloads is full."),

    // -------------------------------------------------------------------------
    // Error: IPsec (facility 0x036)
    // -------------------------------------------------------------------------
    IPSEC_BAD_SPI = (0xC0360001, "the spi in the packet does not match a valid ipsec sa."),
    IPSEC_SA_LIFETIME_EXPIRED = (0xC0360002, "the packet was received on an ipsec sa whose lifetime has expired."),
    IPSEC_WRONG_SA = (0xC0360003, "the packet was received on an ipsec sa that does not match the packet characteristics."),
    IPSEC_REPLAY_CHECK_FAILED = (0xC0360004, "the packet sequence number replay check failed."),
    IPSEC_INVALID_PACKET = (0xC0360005, "the ipsec header and/or trailer in the packet is invalid."),
    IPSEC_INTEGRITY_CHECK_FAILED = (0xC0360006, "the ipsec integrity check failed."),
    IPSEC_CLEAR_TEXT_DROP = (0xC0360007, "ipsec dropped a clear text packet."),
    IPSEC_AUTH_FIREWALL_DROP = (0xC0360008, "ipsec dropped an incoming esp packet in authenticated firewall mode. this drop is benign."),
    IPSEC_THROTTLE_DROP = (0xC0360009, "ipsec dropped a packet due to dos throttle."),
    IPSEC_DOSP_BLOCK = (0xC0368000, "ipsec dos protection matched an explicit block rule."),
    IPSEC_DOSP_RECEIVED_MULTICAST = (0xC0368001, "ipsec dos protection received an ipsec specific multicast packet which is not allowed."),
    IPSEC_DOSP_INVALID_PACKET = (0xC0368002, "ipsec dos protection received an incorrectly formatted packet."),
    IPSEC_DOSP_STATE_LOOKUP_FAILED = (0xC0368003, "ipsec dos protection failed to lookup state."),
    IPSEC_DOSP_MAX_ENTRIES = (0xC0368004, "ipsec dos protection failed to create state because there are already maximum number of entries allowed by policy."),
    IPSEC_DOSP_KEYMOD_NOT_ALLOWED = (0xC0368005, "ipsec dos protection received an ipsec negotiation packet for a keying module which is not allowed by policy."),
    IPSEC_DOSP_MAX_PER_IP_RATELIMIT_QUEUES = (0xC0368006, "ipsec dos protection failed to create per internal ip ratelimit queue because there is already maximum number of queues allowed by policy."),

    // -------------------------------------------------------------------------
    // Error: volume manager (facility 0x038)
    // -------------------------------------------------------------------------
    VOLMGR_MIRROR_NOT_SUPPORTED = (0xC038005B, "the system does not support mirrored volumes."),
    VOLMGR_RAID5_NOT_SUPPORTED = (0xC038005C, "the system does not support raid-5 volumes."),

    // -------------------------------------------------------------------------
    // Error: virtual disk (facility 0x03A)
    // -------------------------------------------------------------------------
    VIRTDISK_PROVIDER_NOT_FOUND = (0xC03A0014, "a virtual disk support provider for the specified file was not found."),
    VIRTDISK_NOT_VIRTUAL_DISK = (0xC03A0015, "the specified disk is not a virtual disk."),
    VHD_PARENT_VHD_ACCESS_DENIED = (0xC03A0016, "the chain of virtual hard disks is inaccessible. the process has not been granted access rights to the parent virtual hard disk for the differencing disk."),
    VHD_CHILD_PARENT_SIZE_MISMATCH = (0xC03A0017, "the chain of virtual hard disks is corrupted. there is a mismatch in the virtual sizes of the parent virtual hard disk and differencing disk."),
    VHD_DIFFERENCING_CHAIN_CYCLE_DETECTED = (0xC03A0018, "the chain of virtual hard disks is corrupted. a differencing disk is indicated in its own parent chain."),
    VHD_DIFFERENCING_CHAIN_ERROR_IN_PARENT = (0xC03A0019, "the chain of virtual hard disks is inaccessible. there was an error opening a virtual hard disk further up the chain."),
}

define_status_aliases! {
    WAIT_0 => SUCCESS,
    ABANDONED_WAIT_0 => ABANDONED,
    FWP_TOO_MANY_CALLOUTS => FWP_TOO_MANY_BOOTTIME_FILTERS,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_are_unique() {
        let mut seen = HashSet::new();
        for entry in ENTRIES {
            assert!(
                seen.insert(entry.status()),
                "duplicate value {} for {}",
                entry.status().hex(),
                entry.name()
            );
        }
    }

    #[test]
    fn names_are_bare_identifiers() {
        let mut seen = HashSet::new();
        for entry in ENTRIES {
            let name = entry.name();
            assert!(!name.is_empty());
            assert!(!name.starts_with("STATUS_"), "{name} keeps its prefix");
            assert!(
                name.bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'),
                "{name} is not an uppercase identifier"
            );
            assert!(seen.insert(name), "duplicate name {name}");
        }
    }

    #[test]
    fn messages_are_lowercase_and_present() {
        for entry in ENTRIES {
            let message = entry.message();
            assert!(!message.trim().is_empty(), "{} has no message", entry.name());
            assert_eq!(
                message,
                message.to_lowercase(),
                "{} message is not lowercased",
                entry.name()
            );
        }
    }

    #[test]
    fn reserved_bit_is_never_set() {
        for entry in ENTRIES {
            assert!(!entry.status().is_reserved_set(), "{}", entry.name());
            assert!(!entry.status().is_customer(), "{}", entry.name());
        }
    }

    #[test]
    fn entries_are_in_ascending_order() {
        for pair in ENTRIES.windows(2) {
            assert!(
                pair[0].status() < pair[1].status(),
                "{} listed after {}",
                pair[1].name(),
                pair[0].name()
            );
        }
    }

    #[test]
    fn lookup_agrees_with_entries() {
        for entry in ENTRIES {
            assert_eq!(lookup(entry.status().value()), Some(*entry));
        }
        assert_eq!(lookup(0xDEAD_BEEF), None);
    }

    #[test]
    fn facility_blocks_have_error_rows() {
        let error_facilities: HashSet<u16> = ENTRIES
            .iter()
            .filter(|entry| entry.status().is_error())
            .map(|entry| entry.status().facility())
            .collect();

        for facility in [0x01D, 0x01E, 0x021, 0x022, 0x023] {
            assert!(
                error_facilities.contains(&facility),
                "no error rows for facility 0x{facility:03X}"
            );
        }
        assert_eq!(
            lookup(0xC01E_0100).map(|entry| entry.name()),
            Some("GRAPHICS_NO_VIDEO_MEMORY")
        );
    }

    #[test]
    fn aliases_share_a_catalogued_value() {
        for &(alias, status) in ALIASES {
            let canonical = lookup(status.value()).expect("alias target is catalogued");
            assert_ne!(canonical.name(), alias);
            assert!(ENTRIES.iter().all(|entry| entry.name() != alias));
        }
        assert_eq!(WAIT_0, SUCCESS);
        assert_eq!(ABANDONED_WAIT_0, ABANDONED);
        assert_eq!(FWP_TOO_MANY_CALLOUTS, FWP_TOO_MANY_BOOTTIME_FILTERS);
    }
}
