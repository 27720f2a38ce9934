use chrono::NaiveDate;

use crate::domain::bid::{Bid, NewBid};
use crate::domain::types::{BidId, TenderId};
use crate::repository::{BidReader, BidWriter, InMemoryRepository, RepositoryResult};

impl BidReader for InMemoryRepository {
    fn list_bids(&self) -> RepositoryResult<Vec<Bid>> {
        let state = self.read()?;
        Ok(state.bids.clone())
    }
}

impl BidWriter for InMemoryRepository {
    fn submit_bid(
        &self,
        tender_id: &TenderId,
        bid: NewBid,
        today: NaiveDate,
    ) -> RepositoryResult<Option<Bid>> {
        let mut state = self.write()?;

        let Some(index) = state.tenders.iter().position(|t| &t.id == tender_id) else {
            return Ok(None);
        };

        let id = BidId::from_sequence(state.next_bid_sequence);
        state.next_bid_sequence += 1;

        let bid = Bid::submit(id, &state.tenders[index], bid, today);
        state.tenders[index].bids.push(bid.clone());
        state.bids.push(bid.clone());
        Ok(Some(bid))
    }
}
