//! Link-time symbols the device build must provide.
//!
//! embassy-time reads its clock through `_embassy_time_now` and its
//! `generic-queue` feature guards the timer queue with `critical-section`.
//! On the host both come from the crates' `std` features instead.

#[cfg(target_os = "espidf")]
use core::cell::RefCell;
#[cfg(target_os = "espidf")]
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialises critical sections across the control loop and the sampler
/// thread; FreeRTOS may run them on different cores.
#[cfg(target_os = "espidf")]
static SECTION_LOCK: Mutex<()> = Mutex::new(());

/// Per-thread nesting depth and the guard held by the outermost section.
#[cfg(target_os = "espidf")]
struct Section {
    depth: u8,
    guard: Option<MutexGuard<'static, ()>>,
}

#[cfg(target_os = "espidf")]
thread_local! {
    static SECTION: RefCell<Section> = const {
        RefCell::new(Section { depth: 0, guard: None })
    };
}

#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_acquire() -> u8 {
    SECTION.with_borrow_mut(|s| {
        if s.depth == 0 {
            // `()` has no state a panic could leave half-written.
            s.guard = Some(SECTION_LOCK.lock().unwrap_or_else(PoisonError::into_inner));
        }
        s.depth = s.depth.saturating_add(1);
        s.depth
    })
}

#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_release(_token: u8) {
    SECTION.with_borrow_mut(|s| match s.depth {
        0 => {}
        1 => {
            s.depth = 0;
            s.guard = None;
        }
        d => s.depth = d - 1,
    })
}

/// Microseconds since boot from `esp_timer`.
#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _embassy_time_now() -> u64 {
    // SAFETY: esp_timer is running before app_main.
    let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
    us.max(0) as u64
}

/// embassy-time-driver declares this symbol next to `_embassy_time_now`,
/// so the image does not link without it. Nothing here awaits a timer.
/// Waking at once is a valid early wake: the poller re-checks the deadline.
#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _embassy_time_schedule_wake(_at: u64, waker: *mut core::ffi::c_void) {
    if waker.is_null() {
        return;
    }
    // SAFETY: embassy-time passes a pointer to a live `Waker` for the
    // duration of the call.
    unsafe { (*(waker as *const core::task::Waker)).wake_by_ref() };
}
