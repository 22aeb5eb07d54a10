#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_DELAY_TOO_SHORT, ERROR_NOT_EXECUTOR, ERROR_NOT_PROPOSER, ERROR_ONLY_TIMELOCK,
    ERROR_OPERATION_NOT_FOUND, ERROR_OPERATION_NOT_PENDING, ERROR_OPERATION_NOT_READY,
    ERROR_ZERO_ADDRESS,
};
use common_structs::{TimelockOperation, TimelockStatus};

/// Time-delayed scheduler. Critical configuration on the registry and the front-ends is only
/// accepted when it arrives from this contract, after the operation's delay has elapsed.
#[multiversx_sc::contract]
pub trait Timelock: common_events::EventsModule {
    /// # Arguments
    /// - `min_delay`: Minimum seconds between scheduling and execution.
    /// - `proposers`: Addresses allowed to schedule, cancel and execute.
    #[init]
    fn init(&self, min_delay: u64, proposers: MultiValueEncoded<ManagedAddress>) {
        self.min_delay().set(min_delay);
        for proposer in proposers {
            require!(!proposer.is_zero(), ERROR_ZERO_ADDRESS);
            self.proposers().insert(proposer.clone());
            self.executors().insert(proposer);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addProposer)]
    fn add_proposer(&self, proposer: ManagedAddress) {
        require!(!proposer.is_zero(), ERROR_ZERO_ADDRESS);
        self.proposers().insert(proposer);
    }

    #[only_owner]
    #[endpoint(removeProposer)]
    fn remove_proposer(&self, proposer: ManagedAddress) {
        self.proposers().swap_remove(&proposer);
    }

    #[only_owner]
    #[endpoint(addExecutor)]
    fn add_executor(&self, executor: ManagedAddress) {
        require!(!executor.is_zero(), ERROR_ZERO_ADDRESS);
        self.executors().insert(executor);
    }

    #[only_owner]
    #[endpoint(removeExecutor)]
    fn remove_executor(&self, executor: ManagedAddress) {
        self.executors().swap_remove(&executor);
    }

    /// Queues `target.endpoint(arguments)` for execution after `delay` seconds.
    ///
    /// # Errors
    /// - `ERROR_NOT_PROPOSER` when the caller is not a proposer.
    /// - `ERROR_DELAY_TOO_SHORT` when `delay` is below the minimum delay.
    #[endpoint(schedule)]
    fn schedule(
        &self,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        delay: u64,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        self.require_proposer();
        require!(!target.is_zero(), ERROR_ZERO_ADDRESS);
        require!(delay >= self.min_delay().get(), ERROR_DELAY_TOO_SHORT);

        let ready_at = self.blockchain().get_block_timestamp() + delay;
        let operation = TimelockOperation {
            target: target.clone(),
            endpoint: endpoint.clone(),
            arguments: arguments.to_vec(),
            ready_at,
            status: TimelockStatus::Pending,
        };

        let id = self.operations().push(&operation) as u64;
        self.timelock_scheduled_event(id, &target, &endpoint, ready_at);

        id
    }

    #[endpoint(execute)]
    fn execute(&self, id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.executors().contains(&caller), ERROR_NOT_EXECUTOR);

        let mut operation = self.get_operation(id);
        require!(operation.is_pending(), ERROR_OPERATION_NOT_PENDING);
        require!(
            operation.is_ready(self.blockchain().get_block_timestamp()),
            ERROR_OPERATION_NOT_READY
        );

        operation.status = TimelockStatus::Done;
        self.operations().set(id as usize, &operation);

        let mut arguments = ManagedArgBuffer::new();
        for argument in operation.arguments.iter() {
            arguments.push_arg_raw(argument.clone_value());
        }

        self.tx()
            .to(&operation.target)
            .raw_call(operation.endpoint)
            .arguments_raw(arguments)
            .sync_call();

        self.timelock_executed_event(id, &caller);
    }

    #[endpoint(cancel)]
    fn cancel(&self, id: u64) {
        self.require_proposer();

        let mut operation = self.get_operation(id);
        require!(operation.is_pending(), ERROR_OPERATION_NOT_PENDING);

        operation.status = TimelockStatus::Cancelled;
        self.operations().set(id as usize, &operation);
        self.timelock_cancelled_event(id);
    }

    /// Can only be reached through `schedule` + `execute` on this contract.
    #[endpoint(updateDelay)]
    fn update_delay(&self, min_delay: u64) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_sc_address(),
            ERROR_ONLY_TIMELOCK
        );
        self.min_delay().set(min_delay);
        self.timelock_delay_updated_event(min_delay);
    }

    #[view(getOperation)]
    fn get_operation(&self, id: u64) -> TimelockOperation<Self::Api> {
        require!(
            id > 0 && id as usize <= self.operations().len(),
            ERROR_OPERATION_NOT_FOUND
        );
        self.operations().get(id as usize)
    }

    #[view(isOperationReady)]
    fn is_operation_ready(&self, id: u64) -> bool {
        self.get_operation(id)
            .is_ready(self.blockchain().get_block_timestamp())
    }

    #[view(isOperationDone)]
    fn is_operation_done(&self, id: u64) -> bool {
        self.get_operation(id).status == TimelockStatus::Done
    }

    fn require_proposer(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.proposers().contains(&caller), ERROR_NOT_PROPOSER);
    }

    #[view(getMinDelay)]
    #[storage_mapper("minDelay")]
    fn min_delay(&self) -> SingleValueMapper<u64>;

    #[view(getProposers)]
    #[storage_mapper("proposers")]
    fn proposers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getExecutors)]
    #[storage_mapper("executors")]
    fn executors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("operations")]
    fn operations(&self) -> VecMapper<TimelockOperation<Self::Api>>;
}
