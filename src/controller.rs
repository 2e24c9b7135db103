//! The form controller: precondition checks and the call into the module.

use crate::error::SubmitError;
use crate::loader::ModuleHandle;
use crate::processor::Processor;

/// Bridges the page's form to the computation module.
///
/// The controller owns nothing but a clone of the injected [`ModuleHandle`];
/// it can itself be cloned freely into event handlers.
#[derive(Debug)]
pub struct FormController<P> {
    module: ModuleHandle<P>,
}

impl<P> Clone for FormController<P> {
    fn clone(&self) -> Self {
        Self {
            module: self.module.clone(),
        }
    }
}

impl<P: Processor> FormController<P> {
    /// Creates a controller over an injected module handle.
    #[must_use]
    pub const fn new(module: ModuleHandle<P>) -> Self {
        Self { module }
    }

    /// Returns true once the module load has resolved successfully.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.module.is_ready()
    }

    /// Forwards the trimmed input to the computation module.
    ///
    /// Empty input is rejected before anything else, so it fails the same
    /// way whether or not the module has loaded. Non-empty input requires a
    /// ready module. A successful call returns the module's output
    /// unmodified; a failed call returns the error's display text verbatim.
    /// The module is never invoked on the rejection paths.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyInput`] if the input trims to nothing,
    /// [`SubmitError::NotReady`] while the handle is pending or failed,
    /// [`SubmitError::Computation`] when the module itself fails.
    pub fn submit(&self, input: &str) -> Result<String, SubmitError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        let outcome = self
            .module
            .with_module(|module| {
                module
                    .process(input)
                    .map_err(|err| SubmitError::Computation(err.to_string()))
            })
            .ok_or(SubmitError::NotReady)?;
        match &outcome {
            Ok(output) => tracing::debug!(input, output = %output, "submission succeeded"),
            Err(err) => tracing::debug!(input, error = %err, "submission failed"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockFailure;

    impl fmt::Display for MockFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("mock failure text")
        }
    }

    impl core::error::Error for MockFailure {}

    struct MockModule {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl MockModule {
        fn new(calls: &Rc<Cell<usize>>, fail: bool) -> Self {
            Self {
                calls: Rc::clone(calls),
                fail,
            }
        }
    }

    impl Processor for MockModule {
        type Err = MockFailure;

        fn process(&self, input: &str) -> Result<String, MockFailure> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(MockFailure)
            } else {
                Ok(format!("processed:{input}"))
            }
        }
    }

    fn ready_controller(fail: bool) -> (FormController<MockModule>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let handle = ModuleHandle::new();
        handle.fulfill(MockModule::new(&calls, fail));
        (FormController::new(handle), calls)
    }

    #[test]
    fn test_empty_input_rejected_without_calling_module() {
        let (controller, calls) = ready_controller(false);
        assert_eq!(controller.submit(""), Err(SubmitError::EmptyInput));
        assert_eq!(controller.submit("   "), Err(SubmitError::EmptyInput));
        assert_eq!(controller.submit("\t\n"), Err(SubmitError::EmptyInput));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_input_rejected_even_before_load() {
        let handle = ModuleHandle::<MockModule>::new();
        let controller = FormController::new(handle);
        assert_eq!(controller.submit("   "), Err(SubmitError::EmptyInput));
    }

    #[test]
    fn test_not_ready_while_pending() {
        let handle = ModuleHandle::<MockModule>::new();
        let controller = FormController::new(handle);
        assert!(!controller.ready());
        assert_eq!(controller.submit("anything"), Err(SubmitError::NotReady));
    }

    #[test]
    fn test_not_ready_after_failed_load() {
        let handle = ModuleHandle::<MockModule>::new();
        handle.fail("import rejected");
        let controller = FormController::new(handle);
        assert!(!controller.ready());
        assert_eq!(controller.submit("anything"), Err(SubmitError::NotReady));
    }

    #[test]
    fn test_success_returns_output_unmodified() {
        let (controller, calls) = ready_controller(false);
        assert!(controller.ready());
        assert_eq!(
            controller.submit("Hello World"),
            Ok("processed:Hello World".into())
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_input_is_trimmed_before_the_call() {
        let (controller, _) = ready_controller(false);
        assert_eq!(
            controller.submit("  Hello World \n"),
            Ok("processed:Hello World".into())
        );
    }

    #[test]
    fn test_computation_error_text_forwarded_verbatim() {
        let (controller, calls) = ready_controller(true);
        assert_eq!(
            controller.submit("anything"),
            Err(SubmitError::Computation("mock failure text".into()))
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_submit_is_idempotent_for_a_pure_module() {
        let (controller, calls) = ready_controller(false);
        let first = controller.submit("same input");
        let second = controller.submit("same input");
        assert_eq!(first, second);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_scenarios_with_the_bundled_module() {
        let handle = ModuleHandle::new();
        handle.fulfill(crate::Sha256Processor::new());
        let controller = FormController::new(handle);
        assert_eq!(
            controller.submit("Hello World"),
            Ok("a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e".into())
        );
        assert_eq!(
            controller.submit("InputTest1"),
            Err(SubmitError::Computation(
                "MagicMistake1: Something magical went wrong!".into()
            ))
        );
    }

    #[test]
    fn test_ready_flips_when_the_shared_handle_resolves() {
        let calls = Rc::new(Cell::new(0));
        let handle = ModuleHandle::new();
        let controller = FormController::new(handle.clone());
        assert_eq!(controller.submit("early"), Err(SubmitError::NotReady));
        handle.fulfill(MockModule::new(&calls, false));
        assert!(controller.ready());
        assert_eq!(controller.submit("early"), Ok("processed:early".into()));
    }
}
