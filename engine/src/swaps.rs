use common_constants::SWAP_ENDPOINT;
use common_errors::{ERROR_INSUFFICIENT_REPAYMENT_FUNDS, ERROR_INSUFFICIENT_SWAP_OUTPUT};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SwapsModule {
    /// Buys exactly `wanted_amount` of `wanted_token`, spending at most `max_in` of
    /// `from_token`, and returns the input actually spent.
    ///
    /// Output above `wanted_amount` and any token other than the two legs go to
    /// `surplus_recipient`; unused input stays with the engine. Same-token requests are
    /// settled without a swap.
    fn swap_exact_out(
        &self,
        router: &ManagedAddress,
        from_token: &EgldOrEsdtTokenIdentifier,
        max_in: &BigUint,
        wanted_token: &EgldOrEsdtTokenIdentifier,
        wanted_amount: &BigUint,
        routing: &ManagedVec<ManagedBuffer>,
        surplus_recipient: &ManagedAddress,
    ) -> BigUint {
        if from_token == wanted_token {
            require!(max_in >= wanted_amount, ERROR_INSUFFICIENT_REPAYMENT_FUNDS);
            return wanted_amount.clone();
        }
        if *wanted_amount == 0 {
            return BigUint::zero();
        }

        let mut args = ManagedArgBuffer::new();
        args.push_arg(wanted_token);
        args.push_arg(wanted_amount);
        for route in routing.iter() {
            args.push_arg_raw(route.clone_value());
        }

        let back_transfers = self
            .tx()
            .to(router)
            .raw_call(ManagedBuffer::new_from_bytes(SWAP_ENDPOINT))
            .arguments_raw(args)
            .egld_or_single_esdt(from_token, 0, max_in)
            .returns(ReturnsBackTransfersReset)
            .sync_call();

        let mut received = BigUint::zero();
        let mut refunded = BigUint::zero();
        let mut others = ManagedVec::new();

        for payment in back_transfers.payments.iter() {
            if payment.token_identifier == *wanted_token {
                received += &payment.amount;
            } else if payment.token_identifier == *from_token {
                refunded += &payment.amount;
            } else {
                others.push((*payment).clone());
            }
        }

        require!(received >= *wanted_amount, ERROR_INSUFFICIENT_SWAP_OUTPUT);
        require!(refunded <= *max_in, ERROR_INSUFFICIENT_SWAP_OUTPUT);

        let surplus = &received - wanted_amount;
        if surplus > 0 {
            others.push(EgldOrEsdtTokenPayment::new(wanted_token.clone(), 0, surplus));
        }
        if !others.is_empty() {
            self.tx()
                .to(surplus_recipient)
                .payment(others)
                .transfer_if_not_empty();
        }

        max_in - &refunded
    }
}
